//! Translation substitution for the read path.
//!
//! Pure value-in/value-out filters. A value is replaced by its
//! active-language translation when one exists and passes through unchanged
//! otherwise; nothing here ever writes.
//!
//! The HTML patchers are a best-effort compatibility shim over markup the
//! host renders around option labels. They locate the exact original label
//! substring and swap only that; when the substring is absent (markup
//! escaped differently than the stored label), single-value renderings fall
//! back to the bare translated label and multi-value renderings to a
//! comma-separated-list match.

use crate::i18n::{TranslationMetrics, TranslationService};
use crate::record::{RecordId, StringNaming};
use regex::Regex;
use std::sync::OnceLock;

static OPTION_BODY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Translate a value registered under `(context, name)` into the active
/// language. Returns the input unchanged when no translation applies.
pub fn translate_value<S: TranslationService>(
    service: &S,
    value: &str,
    context: &str,
    name: &str,
) -> String {
    let translated = service.translate_string(value, context, name);
    if translated == value {
        TranslationMetrics::global().record_substitution_passed();
    } else {
        TranslationMetrics::global().record_substitution_applied();
    }
    translated
}

/// Read-path strategy for one named attribute of one record kind.
///
/// Replaces per-attribute closures: the attribute name and key-naming scheme
/// are data, and `translate` is the uniform value-in/value-out capability
/// registered with the host's render filters.
#[derive(Debug, Clone, Copy)]
pub struct FieldTranslator {
    attribute: &'static str,
    naming: StringNaming,
}

impl FieldTranslator {
    pub fn new(attribute: &'static str, naming: StringNaming) -> Self {
        Self { attribute, naming }
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// String name for this attribute on a given record.
    pub fn string_name(&self, id: RecordId) -> String {
        (self.naming)(id, self.attribute)
    }

    /// Translate `value` for the record `id`. Without an id the key cannot
    /// be computed and the value passes through.
    pub fn translate<S: TranslationService>(
        &self,
        service: &S,
        context: &str,
        value: &str,
        id: Option<RecordId>,
    ) -> String {
        match id {
            Some(id) => translate_value(service, value, context, &self.string_name(id)),
            None => value.to_string(),
        }
    }
}

/// Swap an option label inside `>label</label>` markup (radio/checkbox
/// rendering). First occurrence only; falls back to the bare translated
/// label when the original is not present verbatim.
pub fn patch_label_html(html: &str, original: &str, translated: &str) -> String {
    let needle = format!(">{}</label>", original);
    if html.contains(&needle) {
        html.replacen(&needle, &format!(">{}</label>", translated), 1)
    } else {
        translated.to_string()
    }
}

/// Swap the body of an `<option>` tag (select/multiselect rendering),
/// keeping the value attribute and everything else intact. Falls back to
/// the bare translated label when the markup shape is not recognized.
pub fn patch_option_html(html: &str, translated: &str) -> String {
    let regex = OPTION_BODY_REGEX.get_or_init(|| Regex::new(r#"">(.*)</option>"#).unwrap());
    if regex.is_match(html) {
        regex
            .replace(html, |_: &regex::Captures<'_>| {
                format!("\">{}</option>", translated)
            })
            .into_owned()
    } else {
        translated.to_string()
    }
}

/// Swap a value rendered as a search link, `>value</a>`. Returns the output
/// and whether a replacement happened.
pub fn patch_search_link(value: &str, original: &str, translated: &str) -> (String, bool) {
    let needle = format!(">{}</a>", original);
    if value.contains(&needle) {
        (
            value.replacen(&needle, &format!(">{}</a>", translated), 1),
            true,
        )
    } else {
        (value.to_string(), false)
    }
}

/// Swap one item of a comma-separated list, matching items by trimmed
/// equality. The list is rejoined with `", "`.
pub fn patch_csv_item(value: &str, original: &str, translated: &str) -> String {
    value
        .split(',')
        .map(|item| {
            if item.trim() == original {
                translated
            } else {
                item.trim()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substitution for a single-valued (radio/select) rendered value: search
/// link patched when present, otherwise the translated label wholesale.
pub fn substitute_single_value(value: &str, original: &str, translated: &str) -> String {
    let (out, replaced) = patch_search_link(value, original, translated);
    if replaced {
        out
    } else {
        translated.to_string()
    }
}

/// Substitution for a multi-valued (checkbox/multiselect) rendered value:
/// search link patched when present, otherwise a comma-separated-list match
/// swapping only the matching item.
pub fn substitute_multi_value(value: &str, original: &str, translated: &str) -> String {
    let (out, replaced) = patch_search_link(value, original, translated);
    if replaced {
        return out;
    }
    if out.contains(original) {
        patch_csv_item(&out, original, translated)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{InMemoryTranslationService, Language, TranslationStatus};
    use crate::keys;
    use proptest::prelude::*;

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    fn service_with_translation() -> InMemoryTranslationService {
        let service = InMemoryTranslationService::new(lang("en"));
        service.register_string("ctx", "Group #5 name", "Cats Club", false, None);
        let id = service.string_id("ctx", "Group #5 name").unwrap();
        service.add_string_translation(
            id,
            &lang("fr"),
            "Club des chats",
            TranslationStatus::Complete,
        );
        service
    }

    // ==================== translate_value Tests ====================

    #[test]
    fn test_translate_value_applies_translation() {
        let service = service_with_translation();
        service.set_current_language(lang("fr"));

        assert_eq!(
            translate_value(&service, "Cats Club", "ctx", "Group #5 name"),
            "Club des chats"
        );
    }

    #[test]
    fn test_translate_value_passes_through_untranslated() {
        let service = service_with_translation();
        service.set_current_language(lang("de"));

        assert_eq!(
            translate_value(&service, "Cats Club", "ctx", "Group #5 name"),
            "Cats Club"
        );
    }

    // ==================== FieldTranslator Tests ====================

    #[test]
    fn test_field_translator_string_name() {
        let translator = FieldTranslator::new("name", keys::group);
        assert_eq!(translator.string_name(5), "Group #5 name");
    }

    #[test]
    fn test_field_translator_translates_with_id() {
        let service = service_with_translation();
        service.set_current_language(lang("fr"));

        let translator = FieldTranslator::new("name", keys::group);
        assert_eq!(
            translator.translate(&service, "ctx", "Cats Club", Some(5)),
            "Club des chats"
        );
    }

    #[test]
    fn test_field_translator_passes_through_without_id() {
        let service = service_with_translation();
        service.set_current_language(lang("fr"));

        let translator = FieldTranslator::new("name", keys::group);
        assert_eq!(
            translator.translate(&service, "ctx", "Cats Club", None),
            "Cats Club"
        );
    }

    // ==================== Label Patch Tests ====================

    #[test]
    fn test_patch_label_html_replaces_only_label() {
        let html = r#"<label for="o1"><input type="radio" value="Red">Red</label>"#;
        assert_eq!(
            patch_label_html(html, "Red", "Rouge"),
            r#"<label for="o1"><input type="radio" value="Red">Rouge</label>"#
        );
    }

    #[test]
    fn test_patch_label_html_replaces_first_occurrence_only() {
        let html = ">Red</label>>Red</label>";
        assert_eq!(patch_label_html(html, "Red", "Rouge"), ">Rouge</label>>Red</label>");
    }

    #[test]
    fn test_patch_label_html_fallback_when_absent() {
        let html = "<label>R&amp;d</label>";
        assert_eq!(patch_label_html(html, "R&d", "Rouge"), "Rouge");
    }

    // ==================== Option Patch Tests ====================

    #[test]
    fn test_patch_option_html_swaps_body() {
        let html = r#"<option value="Red">Red</option>"#;
        assert_eq!(
            patch_option_html(html, "Rouge"),
            r#"<option value="Red">Rouge</option>"#
        );
    }

    #[test]
    fn test_patch_option_html_fallback_when_shape_unknown() {
        assert_eq!(patch_option_html("<option>Red", "Rouge"), "Rouge");
    }

    #[test]
    fn test_patch_option_html_translated_with_dollar_sign() {
        // Replacement text must be taken literally, not as a capture ref.
        let html = r#"<option value="x">x</option>"#;
        assert_eq!(
            patch_option_html(html, "$1 menu"),
            r#"<option value="x">$1 menu</option>"#
        );
    }

    // ==================== Search-Link / CSV Tests ====================

    #[test]
    fn test_patch_search_link_replaces() {
        let value = r#"<a href="/search?q=Red">Red</a>"#;
        let (out, replaced) = patch_search_link(value, "Red", "Rouge");
        assert!(replaced);
        assert_eq!(out, r#"<a href="/search?q=Red">Rouge</a>"#);
    }

    #[test]
    fn test_patch_search_link_no_match() {
        let (out, replaced) = patch_search_link("plain Red", "Red", "Rouge");
        assert!(!replaced);
        assert_eq!(out, "plain Red");
    }

    #[test]
    fn test_patch_csv_item_swaps_exact_item() {
        assert_eq!(
            patch_csv_item("Red, Green,Blue", "Green", "Vert"),
            "Red, Vert, Blue"
        );
    }

    #[test]
    fn test_patch_csv_item_does_not_touch_substrings() {
        assert_eq!(
            patch_csv_item("Dark Green, Green", "Green", "Vert"),
            "Dark Green, Vert"
        );
    }

    // ==================== Value Substitution Tests ====================

    #[test]
    fn test_substitute_single_value_fallback_is_translation() {
        assert_eq!(substitute_single_value("plain Red", "Red", "Rouge"), "Rouge");
    }

    #[test]
    fn test_substitute_multi_value_uses_csv_fallback() {
        assert_eq!(
            substitute_multi_value("Red, Green", "Green", "Vert"),
            "Red, Vert"
        );
    }

    #[test]
    fn test_substitute_multi_value_absent_original_unchanged() {
        assert_eq!(substitute_multi_value("Red, Blue", "Green", "Vert"), "Red, Blue");
    }

    // ==================== Patch Properties ====================

    proptest! {
        // Everything around the swapped label stays byte-identical.
        #[test]
        fn prop_label_patch_preserves_surroundings(
            prefix in "[a-zA-Z0-9 =\"<]{0,20}",
            suffix in "[a-zA-Z0-9 =\"<>]{0,20}",
            original in "[a-zA-Z]{1,10}",
            translated in "[a-zA-Z]{1,10}",
        ) {
            let html = format!("{}>{}</label>{}", prefix, original, suffix);
            let patched = patch_label_html(&html, &original, &translated);
            prop_assert!(patched.starts_with(&prefix));
            let needle = format!(">{}</label>", translated);
            prop_assert!(patched.contains(&needle));
        }

        #[test]
        fn prop_csv_patch_preserves_item_count(
            items in proptest::collection::vec("[a-zA-Z]{1,8}", 1..6),
            translated in "[a-zA-Z]{1,8}",
        ) {
            let value = items.join(", ");
            let patched = patch_csv_item(&value, &items[0], &translated);
            prop_assert_eq!(patched.split(", ").count(), items.len());
        }
    }
}
