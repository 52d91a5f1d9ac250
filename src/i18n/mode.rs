//! Translation modes and typed-object references.
//!
//! Fields whose value is an identifier of another content object are remapped
//! between language variants rather than string-substituted. How a given
//! object type participates in that remapping is its translation mode,
//! resolved per call through the external service and never cached here.

use serde::{Deserialize, Serialize};

/// How identifiers of a given object type behave across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// One-to-one translated counterpart per language; untranslated
    /// identifiers have no variant in other languages.
    Translatable,

    /// Falls back to the original identifier when no translation exists,
    /// rather than omitting the item.
    DisplayAsTranslated,

    /// Identifiers pass through unchanged.
    NotTranslatable,
}

impl TranslationMode {
    pub fn uses_fallback(self) -> bool {
        self == TranslationMode::DisplayAsTranslated
    }
}

/// A reference to a typed object: a content item keyed by its type name, or a
/// taxonomy term keyed by its taxonomy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind<'a> {
    PostType(&'a str),
    Taxonomy(&'a str),
}

impl<'a> ObjectKind<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            ObjectKind::PostType(name) | ObjectKind::Taxonomy(name) => name,
        }
    }

    pub fn is_taxonomy(&self) -> bool {
        matches!(self, ObjectKind::Taxonomy(_))
    }
}

/// Owned variant of [`ObjectKind`], for configuration stored on a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum ObjectRef {
    PostType(String),
    Taxonomy(String),
}

impl ObjectRef {
    pub fn as_kind(&self) -> ObjectKind<'_> {
        match self {
            ObjectRef::PostType(name) => ObjectKind::PostType(name),
            ObjectRef::Taxonomy(name) => ObjectKind::Taxonomy(name),
        }
    }
}
