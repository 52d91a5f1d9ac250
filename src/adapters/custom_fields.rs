//! Profile fields whose values are foreign keys.
//!
//! Selector-style fields store post or taxonomy-term ids instead of free
//! text. Those ids are language-bound: the member picked a variant in some
//! language, and rendering in another language must show that language's
//! variant. Read-direction remapping follows the object type's translation
//! mode; save-direction remapping normalizes submitted ids back to the
//! default language before storage.

use crate::i18n::{ObjectRef, TranslationService};
use crate::record::RecordId;
use crate::resolver::{remap_id, remap_id_for_save, remap_ids, remap_ids_for_save};

/// What a selector field's stored ids point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyKind {
    Post,
    TaxonomyTerm,
}

/// The host's knowledge of post types and field selector configuration.
pub trait ContentTypes {
    /// Actual post type of an existing post.
    fn post_type_of(&self, id: RecordId) -> Option<String>;

    /// Post type a post-selector field is configured to draw from.
    fn field_post_type(&self, field_id: RecordId) -> Option<String>;

    /// Taxonomy a term-selector field is configured to draw from.
    fn field_taxonomy(&self, field_id: RecordId) -> Option<String>;
}

/// A stored selector value: a scalar id payload or a list of term ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<RecordId>),
}

/// Object reference a field's stored ids belong to, per its configuration.
pub fn field_object<C: ContentTypes>(
    types: &C,
    field_id: RecordId,
    kind: ForeignKeyKind,
) -> Option<ObjectRef> {
    match kind {
        ForeignKeyKind::Post => types.field_post_type(field_id).map(ObjectRef::PostType),
        ForeignKeyKind::TaxonomyTerm => types.field_taxonomy(field_id).map(ObjectRef::Taxonomy),
    }
}

/// Remap a scalar id payload for display. The payload is the raw stored
/// string; non-numeric payloads pass through, and a reference dropped by
/// the translation mode collapses to the empty string.
pub fn remap_scalar_payload<S: TranslationService>(
    service: &S,
    payload: &str,
    object: &ObjectRef,
) -> String {
    let Ok(id) = payload.trim().parse::<RecordId>() else {
        return payload.to_string();
    };
    match remap_id(service, id, &object.as_kind()) {
        Some(mapped) => mapped.to_string(),
        None => String::new(),
    }
}

/// Remap a member's stored selector value for display in the current
/// language. Unconfigured fields pass through untouched.
pub fn remap_stored_value<S, C>(
    service: &S,
    types: &C,
    field_id: RecordId,
    kind: ForeignKeyKind,
    value: FieldValue,
) -> FieldValue
where
    S: TranslationService,
    C: ContentTypes,
{
    let Some(object) = field_object(types, field_id, kind) else {
        return value;
    };
    match value {
        FieldValue::Single(payload) => {
            FieldValue::Single(remap_scalar_payload(service, &payload, &object))
        }
        FieldValue::Multi(ids) => FieldValue::Multi(remap_ids(service, &ids, &object.as_kind())),
    }
}

/// Normalize a submitted selector value to default-language ids before it
/// is persisted.
///
/// For posts the submitted id's actual post type decides the object kind,
/// so a field drawing from a translated type still normalizes correctly
/// when the selector listed variants. Term lists use the field's
/// configured taxonomy.
pub fn remap_value_on_save<S, C>(
    service: &S,
    types: &C,
    field_id: RecordId,
    kind: ForeignKeyKind,
    value: FieldValue,
) -> FieldValue
where
    S: TranslationService,
    C: ContentTypes,
{
    match value {
        FieldValue::Single(payload) => {
            let Ok(id) = payload.trim().parse::<RecordId>() else {
                return FieldValue::Single(payload);
            };
            let object = match kind {
                ForeignKeyKind::Post => types
                    .post_type_of(id)
                    .map(ObjectRef::PostType)
                    .or_else(|| field_object(types, field_id, kind)),
                ForeignKeyKind::TaxonomyTerm => field_object(types, field_id, kind),
            };
            match object {
                Some(object) => FieldValue::Single(
                    remap_id_for_save(service, id, &object.as_kind()).to_string(),
                ),
                None => FieldValue::Single(payload),
            }
        }
        FieldValue::Multi(ids) => match field_object(types, field_id, kind) {
            Some(object) => {
                FieldValue::Multi(remap_ids_for_save(service, &ids, &object.as_kind()))
            }
            None => FieldValue::Multi(ids),
        },
    }
}
