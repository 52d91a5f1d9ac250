//! Language partitioning of the sitewide activity feed.
//!
//! Activity entries announcing new posts exist once per language variant of
//! the post. Showing all of them duplicates the feed; the partition keeps,
//! for each viewer, exactly one entry per post: the current-language one,
//! or the default-language one for display-as-translated types with no
//! current-language counterpart.

use crate::i18n::{Language, ObjectKind, TranslationMode, TranslationService};
use crate::record::RecordId;
use crate::resolver::translation_mode;

/// Prefix the host gives activity types announcing a new post of some type.
pub const POST_TYPE_ACTIVITY_PREFIX: &str = "new_blog_";

/// Activity type string announcing new posts of `post_type`.
pub fn activity_type_for(post_type: &str) -> String {
    format!("{}{}", POST_TYPE_ACTIVITY_PREFIX, post_type)
}

/// Post-type activity types bucketed by the translation mode of the
/// underlying post type. Types in neither bucket are language-neutral.
#[derive(Debug, Clone, Default)]
pub struct TypesByMode {
    pub translated: Vec<String>,
    pub display_as_translated: Vec<String>,
}

impl TypesByMode {
    fn mode_of(&self, activity_type: &str) -> Option<TranslationMode> {
        if self.translated.iter().any(|t| t == activity_type) {
            Some(TranslationMode::Translatable)
        } else if self.display_as_translated.iter().any(|t| t == activity_type) {
            Some(TranslationMode::DisplayAsTranslated)
        } else {
            None
        }
    }
}

/// Bucket the given post types by their effective translation mode.
pub fn types_by_translation_mode<S: TranslationService>(
    service: &S,
    post_types: &[&str],
) -> TypesByMode {
    let mut types = TypesByMode::default();
    for post_type in post_types {
        match translation_mode(service, &ObjectKind::PostType(post_type)) {
            TranslationMode::Translatable => types.translated.push(activity_type_for(post_type)),
            TranslationMode::DisplayAsTranslated => {
                types.display_as_translated.push(activity_type_for(post_type));
            }
            TranslationMode::NotTranslatable => {}
        }
    }
    types
}

/// One feed entry with whatever language info the host's join produced.
/// `language: None` means the referenced element carries no translation
/// record at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub activity_type: String,
    pub element_id: Option<RecordId>,
    pub language: Option<Language>,
}

/// Filter a feed page down to the entries visible in the current language.
///
/// Entries of language-neutral types, and entries whose element has no
/// translation info, stay visible. Translated types show only their
/// current-language entries. Display-as-translated types keep the
/// default-language entry only when the service knows no current-language
/// variant of the post; whether that variant is actually published is not
/// visible here and is not checked.
pub fn filter_activities<S: TranslationService>(
    service: &S,
    entries: Vec<ActivityEntry>,
    types: &TypesByMode,
) -> Vec<ActivityEntry> {
    let (Some(current), Some(default)) = (service.current_language(), service.default_language())
    else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| {
            let Some(mode) = types.mode_of(&entry.activity_type) else {
                return true;
            };
            let Some(language) = entry.language.as_ref() else {
                return true;
            };
            match mode {
                TranslationMode::Translatable => *language == current,
                TranslationMode::DisplayAsTranslated => {
                    *language == current
                        || (*language == default && !has_current_variant(service, entry))
                }
                TranslationMode::NotTranslatable => true,
            }
        })
        .collect()
}

fn has_current_variant<S: TranslationService>(service: &S, entry: &ActivityEntry) -> bool {
    let Some(id) = entry.element_id else {
        return false;
    };
    let post_type = entry
        .activity_type
        .strip_prefix(POST_TYPE_ACTIVITY_PREFIX)
        .unwrap_or(&entry.activity_type);
    service
        .remap_object_id(id, &ObjectKind::PostType(post_type), false, None)
        .is_some()
}
