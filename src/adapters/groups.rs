//! Social-group names and descriptions.
//!
//! Group rows carry two free-text attributes. Both register on save under
//! `Group #{id} {attribute}` keys and substitute on every read, including
//! directory listings and the excerpted description in group cards.

use crate::guard::save_edited_fields;
use crate::i18n::{Language, TranslationService};
use crate::keys;
use crate::record::{Record, RecordId, RecordStore};
use crate::registrar::register_record;
use crate::substitute::FieldTranslator;

/// Attributes of a group row that carry translatable free text.
pub const FIELDS: &[&str] = &["name", "description"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
}

impl Record for Group {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

/// A page of groups as returned by the host's directory query.
#[derive(Debug, Clone)]
pub struct GroupQueryResult {
    pub groups: Vec<Group>,
    pub total: usize,
}

/// Read-path translator for one group attribute.
pub fn field_translator(attribute: &'static str) -> FieldTranslator {
    FieldTranslator::new(attribute, keys::group)
}

/// Register a group's translatable attributes after it is saved.
pub fn register_group<S: TranslationService>(
    service: &S,
    context: &str,
    group: &Group,
    language: Option<&Language>,
) {
    register_record(service, context, group, keys::group, FIELDS, language);
}

/// Intercept an edit submitted from the group admin screen, preserving
/// canonical values when the editor browses in a language other than the
/// one the group's strings were registered in.
pub fn save_edited_group<S, St>(service: &S, store: &St, context: &str, group: &mut Group)
where
    S: TranslationService,
    St: RecordStore,
{
    save_edited_fields(service, store, context, group, keys::group, FIELDS);
}

/// Substitute a single group's attributes in place.
pub fn translate_group<S: TranslationService>(service: &S, context: &str, group: &mut Group) {
    for attribute in FIELDS {
        let translator = FieldTranslator::new(attribute, keys::group);
        if let Some(value) = group.attribute(attribute) {
            let translated = translator.translate(service, context, value, group.id);
            group.set_attribute(attribute, translated);
        }
    }
}

/// Substitute every group in a directory query result.
pub fn translate_groups<S: TranslationService>(
    service: &S,
    context: &str,
    result: &mut GroupQueryResult,
) {
    for group in &mut result.groups {
        translate_group(service, context, group);
    }
}

/// Translate a group description and cut it to the card excerpt length.
pub fn translate_excerpt<S: TranslationService>(
    service: &S,
    context: &str,
    id: Option<RecordId>,
    description: &str,
    length: usize,
) -> String {
    let translated = field_translator("description").translate(service, context, description, id);
    create_excerpt(&translated, length)
}

/// Cut text at a word boundary within `length` characters, appending an
/// ellipsis when anything was removed.
pub fn create_excerpt(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let capped: String = text.chars().take(length).collect();
    let cut = match capped.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => capped[..pos].trim_end().to_string(),
        _ => capped,
    };
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{InMemoryTranslationService, TranslationStatus};

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    fn translated_service() -> InMemoryTranslationService {
        let service = InMemoryTranslationService::new(lang("en"));
        let group = Group {
            id: Some(5),
            name: "Cats Club".to_string(),
            description: "All about cats".to_string(),
        };
        register_group(&service, "ctx", &group, None);

        let name_id = service.string_id("ctx", "Group #5 name").unwrap();
        service.add_string_translation(
            name_id,
            &lang("fr"),
            "Club des chats",
            TranslationStatus::Complete,
        );
        let desc_id = service.string_id("ctx", "Group #5 description").unwrap();
        service.add_string_translation(
            desc_id,
            &lang("fr"),
            "Tout sur les chats",
            TranslationStatus::Complete,
        );
        service
    }

    // ==================== Registration Tests ====================

    #[test]
    fn test_register_group_registers_both_fields() {
        let service = InMemoryTranslationService::new(lang("en"));
        let group = Group {
            id: Some(5),
            name: "Cats Club".to_string(),
            description: "All about cats".to_string(),
        };

        register_group(&service, "ctx", &group, None);

        assert_eq!(
            service.registered_value("ctx", "Group #5 name"),
            Some("Cats Club".to_string())
        );
        assert_eq!(
            service.registered_value("ctx", "Group #5 description"),
            Some("All about cats".to_string())
        );
    }

    // ==================== Substitution Tests ====================

    #[test]
    fn test_translate_group_substitutes_in_active_language() {
        let service = translated_service();
        service.set_current_language(lang("fr"));

        let mut group = Group {
            id: Some(5),
            name: "Cats Club".to_string(),
            description: "All about cats".to_string(),
        };
        translate_group(&service, "ctx", &mut group);

        assert_eq!(group.name, "Club des chats");
        assert_eq!(group.description, "Tout sur les chats");
    }

    #[test]
    fn test_translate_group_without_id_passes_through() {
        let service = translated_service();
        service.set_current_language(lang("fr"));

        let mut group = Group {
            id: None,
            name: "Cats Club".to_string(),
            description: "All about cats".to_string(),
        };
        translate_group(&service, "ctx", &mut group);

        assert_eq!(group.name, "Cats Club");
    }

    #[test]
    fn test_translate_groups_covers_every_row() {
        let service = translated_service();
        service.set_current_language(lang("fr"));

        let mut result = GroupQueryResult {
            groups: vec![
                Group {
                    id: Some(5),
                    name: "Cats Club".to_string(),
                    description: "All about cats".to_string(),
                },
                Group {
                    id: Some(6),
                    name: "Dogs Club".to_string(),
                    description: String::new(),
                },
            ],
            total: 2,
        };
        translate_groups(&service, "ctx", &mut result);

        assert_eq!(result.groups[0].name, "Club des chats");
        // Never registered, so untouched.
        assert_eq!(result.groups[1].name, "Dogs Club");
    }

    // ==================== Excerpt Tests ====================

    #[test]
    fn test_create_excerpt_cuts_on_word_boundary() {
        assert_eq!(create_excerpt("all about cats and dogs", 14), "all about…");
    }

    #[test]
    fn test_create_excerpt_keeps_short_text() {
        assert_eq!(create_excerpt("short", 20), "short");
    }

    #[test]
    fn test_translate_excerpt_uses_translation() {
        let service = translated_service();
        service.set_current_language(lang("fr"));

        let excerpt = translate_excerpt(&service, "ctx", Some(5), "All about cats", 9);
        assert_eq!(excerpt, "Tout sur…");
    }
}
