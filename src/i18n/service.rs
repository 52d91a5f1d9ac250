//! External translation-management service contract.
//!
//! Everything this crate knows about languages, translatable strings, and
//! object-ID remapping comes through this trait. The host wires in the real
//! translation layer; tests use [`crate::i18n::InMemoryTranslationService`].

use crate::i18n::{Language, ObjectKind};
use crate::record::RecordId;

pub type StringId = u64;
pub type TranslationId = u64;

/// Status attached to a stored translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    NotTranslated,
    NeedsUpdate,
    Complete,
}

/// The set of operations the external translation layer supplies.
///
/// All methods take `&self`: the service is shared across every adapter in a
/// request, and implementations use interior mutability for their own state.
/// Lookup methods answer from the service's current state on every call;
/// nothing here may be cached by callers across a `switch_language`.
pub trait TranslationService {
    /// Language selected for the current request's rendering, if any.
    fn current_language(&self) -> Option<Language>;

    /// Language canonical content is authored and stored in, if configured.
    fn default_language(&self) -> Option<Language>;

    /// Register (or idempotently update) a translatable string.
    ///
    /// `language` is the registration language for the value; `None` lets the
    /// service resolve it. `allow_language_override` permits re-registration
    /// to move the string's language.
    fn register_string(
        &self,
        context: &str,
        name: &str,
        text: &str,
        allow_language_override: bool,
        language: Option<&Language>,
    );

    /// Remove a string registration and its translations.
    fn unregister_string(&self, context: &str, name: &str);

    /// Numeric id of a registered string, if the key is known.
    fn string_id(&self, context: &str, name: &str) -> Option<StringId>;

    /// Language a registered string was registered in.
    fn string_language(&self, context: &str, name: &str) -> Option<Language>;

    fn is_string_registered(&self, context: &str, name: &str) -> bool {
        self.string_id(context, name).is_some()
    }

    /// Translate a registered string into the current language.
    ///
    /// Returns `text` unchanged when the key is unknown, untranslated in the
    /// current language, or no current language is resolvable.
    fn translate_string(&self, text: &str, context: &str, name: &str) -> String;

    /// Store a translation of an existing string for a language.
    fn add_string_translation(
        &self,
        string_id: StringId,
        language: &Language,
        text: &str,
        status: TranslationStatus,
    ) -> TranslationId;

    /// Map an object id to its variant in `target` (current language when
    /// `None`). With `display_as_translated_fallback`, the input id is
    /// returned when no direct translation exists; otherwise `None`.
    fn remap_object_id(
        &self,
        id: RecordId,
        object: &ObjectKind<'_>,
        display_as_translated_fallback: bool,
        target: Option<&Language>,
    ) -> Option<RecordId>;

    /// Whether the object type is translated one-to-one.
    fn is_translated(&self, object: &ObjectKind<'_>) -> bool;

    /// Whether the object type falls back to the original when untranslated.
    fn is_display_as_translated(&self, object: &ObjectKind<'_>) -> bool;

    /// Whether taxonomy-term translation is available at all. When the
    /// translation layer for terms is absent, taxonomy references resolve as
    /// not translatable.
    fn taxonomy_support(&self) -> bool {
        true
    }

    /// Signal a language switch so downstream per-language caches refresh.
    fn switch_language(&self, language: &Language);
}
