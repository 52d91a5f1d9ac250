//! Translatable-value registrar.
//!
//! On every save of a record with free-text attributes, the current values
//! are registered with the translation service under their deterministic
//! keys. Registration is an upsert on the service side; the caller's only
//! obligations are key stability and skipping re-registration when the same
//! record already went through a save sequence in this request.

use crate::i18n::{Language, TranslationMetrics, TranslationService};
use crate::record::{Record, RecordId, SaveTracker, StringNaming};
use tracing::debug;

/// Register one value under a key, in `language` (or whatever the service
/// resolves when `None`). Empty values are not registrable; returns whether
/// a registration call was made.
pub fn register_value<S: TranslationService>(
    service: &S,
    context: &str,
    name: &str,
    text: &str,
    language: Option<&Language>,
) -> bool {
    if text.is_empty() {
        return false;
    }

    debug!(name, ?language, "registering translatable string");
    service.register_string(context, name, text, true, language);
    TranslationMetrics::global().record_registration();
    true
}

/// Register a value unless this record already completed a save sequence in
/// the current request.
pub fn register_unless_processed<S: TranslationService>(
    service: &S,
    tracker: &SaveTracker,
    context: &str,
    id: RecordId,
    name: &str,
    text: &str,
    language: Option<&Language>,
) -> bool {
    if tracker.contains(id) {
        debug!(id, name, "skipping re-registration, already processed");
        return false;
    }
    register_value(service, context, name, text, language)
}

/// Register every designated attribute of a saved record.
///
/// Does nothing for records without an id. Does not mutate the record.
pub fn register_record<S: TranslationService, R: Record>(
    service: &S,
    context: &str,
    record: &R,
    naming: StringNaming,
    attributes: &[&str],
    language: Option<&Language>,
) {
    let Some(id) = record.id() else {
        return;
    };

    for attribute in attributes {
        if let Some(value) = record.attribute(attribute) {
            register_value(service, context, &naming(id, attribute), value, language);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::InMemoryTranslationService;
    use crate::keys;

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    struct Row {
        id: Option<RecordId>,
        name: String,
        description: String,
    }

    impl Record for Row {
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

    // ==================== register_value Tests ====================

    #[test]
    fn test_register_value_skips_empty() {
        let service = InMemoryTranslationService::new(lang("en"));
        assert!(!register_value(&service, "ctx", "Group #5 name", "", None));
        assert!(service.string_id("ctx", "Group #5 name").is_none());
    }

    #[test]
    fn test_register_value_registers_in_given_language() {
        let service = InMemoryTranslationService::new(lang("en"));
        service.set_current_language(lang("fr"));

        assert!(register_value(
            &service,
            "ctx",
            "Group #5 name",
            "Cats Club",
            Some(&lang("en"))
        ));
        assert_eq!(service.string_language("ctx", "Group #5 name"), Some(lang("en")));
    }

    // ==================== Dedup Tests ====================

    #[test]
    fn test_register_unless_processed_skips_processed_ids() {
        let service = InMemoryTranslationService::new(lang("en"));
        let mut tracker = SaveTracker::new();
        tracker.mark(5);

        assert!(!register_unless_processed(
            &service,
            &tracker,
            "ctx",
            5,
            "Group #5 name",
            "Cats Club",
            None
        ));
        assert!(service.string_id("ctx", "Group #5 name").is_none());
    }

    #[test]
    fn test_register_unless_processed_registers_fresh_ids() {
        let service = InMemoryTranslationService::new(lang("en"));
        let tracker = SaveTracker::new();

        assert!(register_unless_processed(
            &service,
            &tracker,
            "ctx",
            5,
            "Group #5 name",
            "Cats Club",
            None
        ));
        assert!(service.string_id("ctx", "Group #5 name").is_some());
    }

    // ==================== register_record Tests ====================

    #[test]
    fn test_register_record_registers_all_attributes() {
        let service = InMemoryTranslationService::new(lang("en"));
        let row = Row {
            id: Some(5),
            name: "Cats Club".to_string(),
            description: "All about cats".to_string(),
        };

        register_record(
            &service,
            "ctx",
            &row,
            keys::group,
            &["name", "description"],
            None,
        );

        assert_eq!(
            service.registered_value("ctx", "Group #5 name"),
            Some("Cats Club".to_string())
        );
        assert_eq!(
            service.registered_value("ctx", "Group #5 description"),
            Some("All about cats".to_string())
        );
    }

    #[test]
    fn test_register_record_without_id_is_a_no_op() {
        let service = InMemoryTranslationService::new(lang("en"));
        let row = Row {
            id: None,
            name: "Cats Club".to_string(),
            description: String::new(),
        };

        register_record(&service, "ctx", &row, keys::group, &["name"], None);
        assert!(service.string_id("ctx", "Group #0 name").is_none());
    }
}
