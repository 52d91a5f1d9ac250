//! Foreign-key remapping between language variants.
//!
//! Profile values that reference other host objects by id (a post, a term)
//! must point at the variant matching the rendering language on the read
//! path, and at the canonical default-language variant on the save path.
//! How an unresolvable reference behaves depends on the object type's
//! translation mode.

use crate::i18n::{ObjectKind, TranslationMetrics, TranslationMode, TranslationService};
use crate::record::RecordId;
use tracing::debug;

/// Resolve the effective translation mode of an object type.
///
/// Display-as-translated wins over plain translatable when the service
/// reports both. Taxonomy types resolve as not translatable when the
/// service has no term-translation support at all.
pub fn translation_mode<S: TranslationService>(
    service: &S,
    object: &ObjectKind<'_>,
) -> TranslationMode {
    if object.is_taxonomy() && !service.taxonomy_support() {
        return TranslationMode::NotTranslatable;
    }
    if service.is_display_as_translated(object) {
        TranslationMode::DisplayAsTranslated
    } else if service.is_translated(object) {
        TranslationMode::Translatable
    } else {
        TranslationMode::NotTranslatable
    }
}

/// Map a stored reference id to the variant for the current language.
///
/// Not-translatable types pass through unchanged. Translatable types drop
/// the reference (`None`) when no variant exists in the current language;
/// display-as-translated types keep the original id instead.
pub fn remap_id<S: TranslationService>(
    service: &S,
    id: RecordId,
    object: &ObjectKind<'_>,
) -> Option<RecordId> {
    match translation_mode(service, object) {
        TranslationMode::NotTranslatable => Some(id),
        mode => {
            let remapped = service.remap_object_id(id, object, mode.uses_fallback(), None);
            match remapped {
                Some(mapped) => {
                    TranslationMetrics::global().record_id_remapped();
                    Some(mapped)
                }
                None => {
                    debug!(id, object = object.name(), "dropping untranslated reference");
                    TranslationMetrics::global().record_id_dropped();
                    None
                }
            }
        }
    }
}

/// Remap a list of reference ids, preserving order and dropping entries
/// that resolve to nothing.
pub fn remap_ids<S: TranslationService>(
    service: &S,
    ids: &[RecordId],
    object: &ObjectKind<'_>,
) -> Vec<RecordId> {
    ids.iter()
        .filter_map(|&id| remap_id(service, id, object))
        .collect()
}

/// Map a submitted reference id back to its default-language variant before
/// it is persisted.
///
/// Saving while browsing in a non-default language submits ids of that
/// language's variants; canonical storage keeps default-language ids. When
/// no default-language variant exists the submitted id is kept.
pub fn remap_id_for_save<S: TranslationService>(
    service: &S,
    id: RecordId,
    object: &ObjectKind<'_>,
) -> RecordId {
    let (Some(current), Some(default)) = (service.current_language(), service.default_language())
    else {
        return id;
    };
    if current == default {
        return id;
    }
    if matches!(translation_mode(service, object), TranslationMode::NotTranslatable) {
        return id;
    }

    match service.remap_object_id(id, object, true, Some(&default)) {
        Some(mapped) => {
            TranslationMetrics::global().record_id_remapped();
            mapped
        }
        None => id,
    }
}

/// Save-direction counterpart of [`remap_ids`]. Nothing is dropped.
pub fn remap_ids_for_save<S: TranslationService>(
    service: &S,
    ids: &[RecordId],
    object: &ObjectKind<'_>,
) -> Vec<RecordId> {
    ids.iter()
        .map(|&id| remap_id_for_save(service, id, object))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{InMemoryTranslationService, Language};

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    fn service() -> InMemoryTranslationService {
        let service = InMemoryTranslationService::new(lang("en"));
        service.set_current_language(lang("fr"));
        service
    }

    // ==================== Mode Resolution Tests ====================

    #[test]
    fn test_mode_defaults_to_not_translatable() {
        let service = service();
        assert_eq!(
            translation_mode(&service, &ObjectKind::PostType("recipe")),
            TranslationMode::NotTranslatable
        );
    }

    #[test]
    fn test_mode_display_as_translated_wins() {
        let service = service();
        service.set_translation_mode(&ObjectKind::PostType("recipe"), TranslationMode::DisplayAsTranslated);
        assert_eq!(
            translation_mode(&service, &ObjectKind::PostType("recipe")),
            TranslationMode::DisplayAsTranslated
        );
    }

    #[test]
    fn test_taxonomy_without_term_support_is_not_translatable() {
        let service = service();
        service.set_translation_mode(&ObjectKind::Taxonomy("genre"), TranslationMode::Translatable);
        service.set_taxonomy_support(false);
        assert_eq!(
            translation_mode(&service, &ObjectKind::Taxonomy("genre")),
            TranslationMode::NotTranslatable
        );
    }

    // ==================== Read-Path Remap Tests ====================

    #[test]
    fn test_not_translatable_reference_is_identity() {
        let service = service();
        assert_eq!(remap_id(&service, 42, &ObjectKind::PostType("recipe")), Some(42));
    }

    #[test]
    fn test_translatable_reference_maps_to_variant() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);
        service.add_object(&kind, 42, lang("en"));
        service.add_object_variant(&kind, 42, lang("fr"), 142);

        assert_eq!(remap_id(&service, 42, &kind), Some(142));
    }

    #[test]
    fn test_translatable_reference_without_variant_is_dropped() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);
        service.add_object(&kind, 42, lang("en"));

        assert_eq!(remap_id(&service, 42, &kind), None);
    }

    #[test]
    fn test_display_as_translated_falls_back_to_original() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::DisplayAsTranslated);
        service.add_object(&kind, 42, lang("en"));

        assert_eq!(remap_id(&service, 42, &kind), Some(42));
    }

    #[test]
    fn test_remap_ids_preserves_order_and_drops_holes() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);
        service.add_object(&kind, 1, lang("en"));
        service.add_object_variant(&kind, 1, lang("fr"), 101);
        service.add_object(&kind, 2, lang("en"));
        service.add_object(&kind, 3, lang("en"));
        service.add_object_variant(&kind, 3, lang("fr"), 103);

        assert_eq!(remap_ids(&service, &[1, 2, 3], &kind), vec![101, 103]);
    }

    // ==================== Save-Path Remap Tests ====================

    #[test]
    fn test_save_remap_maps_back_to_default_language() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);
        service.add_object(&kind, 142, lang("fr"));
        service.add_object_variant(&kind, 142, lang("en"), 42);

        assert_eq!(remap_id_for_save(&service, 142, &kind), 42);
    }

    #[test]
    fn test_save_remap_keeps_id_without_default_variant() {
        let service = service();
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);
        service.add_object(&kind, 142, lang("fr"));

        assert_eq!(remap_id_for_save(&service, 142, &kind), 142);
    }

    #[test]
    fn test_save_remap_is_identity_in_default_language() {
        let service = InMemoryTranslationService::new(lang("en"));
        let kind = ObjectKind::PostType("recipe");
        service.set_translation_mode(&kind, TranslationMode::Translatable);

        assert_eq!(remap_id_for_save(&service, 142, &kind), 142);
    }
}
