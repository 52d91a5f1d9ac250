//! In-memory reference implementation of [`TranslationService`].
//!
//! Backs the test suite and doubles as executable documentation of the
//! contract: an upserting string registry, a per-language translation store,
//! object variant maps with per-type translation modes, and a current/default
//! language pair honoring `switch_language`.

use crate::i18n::{
    Language, ObjectKind, StringId, TranslationId, TranslationMode, TranslationService,
    TranslationStatus,
};
use crate::record::RecordId;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct StringEntry {
    id: StringId,
    language: Option<Language>,
    value: String,
}

#[derive(Debug, Default)]
struct Inner {
    current: Option<Language>,
    default: Option<Language>,
    next_string_id: StringId,
    next_translation_id: TranslationId,
    strings: HashMap<(String, String), StringEntry>,
    translations: HashMap<(StringId, Language), String>,
    modes: HashMap<(bool, String), TranslationMode>,
    object_language: HashMap<(bool, String, RecordId), Language>,
    object_variants: HashMap<(bool, String, RecordId, Language), RecordId>,
    taxonomy_support: bool,
    switches: Vec<Language>,
}

pub struct InMemoryTranslationService {
    inner: Mutex<Inner>,
}

fn kind_key(object: &ObjectKind<'_>) -> (bool, String) {
    (object.is_taxonomy(), object.name().to_string())
}

impl InMemoryTranslationService {
    /// Create a service whose default and current language are both `default`.
    pub fn new(default: Language) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: Some(default.clone()),
                default: Some(default),
                next_string_id: 1,
                next_translation_id: 1,
                taxonomy_support: true,
                ..Inner::default()
            }),
        }
    }

    /// Create a service with neither a default nor a current language, as
    /// seen by hosts running without the translation layer configured.
    pub fn without_languages() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_string_id: 1,
                next_translation_id: 1,
                taxonomy_support: false,
                ..Inner::default()
            }),
        }
    }

    pub fn set_current_language(&self, language: Language) {
        self.inner.lock().unwrap().current = Some(language);
    }

    pub fn set_default_language(&self, language: Language) {
        self.inner.lock().unwrap().default = Some(language);
    }

    pub fn set_translation_mode(&self, object: &ObjectKind<'_>, mode: TranslationMode) {
        self.inner.lock().unwrap().modes.insert(kind_key(object), mode);
    }

    pub fn set_taxonomy_support(&self, available: bool) {
        self.inner.lock().unwrap().taxonomy_support = available;
    }

    /// Declare an object instance and the language it belongs to.
    pub fn add_object(&self, object: &ObjectKind<'_>, id: RecordId, language: Language) {
        let (tax, name) = kind_key(object);
        self.inner
            .lock()
            .unwrap()
            .object_language
            .insert((tax, name, id), language);
    }

    /// Link an object to its variant in another language (one direction).
    pub fn add_object_variant(
        &self,
        object: &ObjectKind<'_>,
        id: RecordId,
        language: Language,
        variant_id: RecordId,
    ) {
        let (tax, name) = kind_key(object);
        let mut inner = self.inner.lock().unwrap();
        inner
            .object_language
            .entry((tax, name.clone(), variant_id))
            .or_insert_with(|| language.clone());
        inner
            .object_variants
            .insert((tax, name, id, language), variant_id);
    }

    /// Canonical value currently registered under a key, for assertions.
    pub fn registered_value(&self, context: &str, name: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .strings
            .get(&(context.to_string(), name.to_string()))
            .map(|entry| entry.value.clone())
    }

    /// Stored translation of a string for a language, for assertions.
    pub fn stored_translation(&self, string_id: StringId, language: &Language) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .translations
            .get(&(string_id, language.clone()))
            .cloned()
    }

    /// How many `switch_language` signals were observed.
    pub fn switch_count(&self) -> usize {
        self.inner.lock().unwrap().switches.len()
    }
}

impl TranslationService for InMemoryTranslationService {
    fn current_language(&self) -> Option<Language> {
        self.inner.lock().unwrap().current.clone()
    }

    fn default_language(&self) -> Option<Language> {
        self.inner.lock().unwrap().default.clone()
    }

    fn register_string(
        &self,
        context: &str,
        name: &str,
        text: &str,
        allow_language_override: bool,
        language: Option<&Language>,
    ) {
        let mut inner = self.inner.lock().unwrap();
        let resolved = language.cloned().or_else(|| inner.current.clone());
        let key = (context.to_string(), name.to_string());

        match inner.strings.get_mut(&key) {
            Some(entry) => {
                entry.value = text.to_string();
                if allow_language_override && language.is_some() {
                    entry.language = resolved;
                }
            }
            None => {
                let id = inner.next_string_id;
                inner.next_string_id += 1;
                inner.strings.insert(
                    key,
                    StringEntry {
                        id,
                        language: resolved,
                        value: text.to_string(),
                    },
                );
            }
        }
    }

    fn unregister_string(&self, context: &str, name: &str) {
        let mut inner = self.inner.lock().unwrap();
        let key = (context.to_string(), name.to_string());
        if let Some(entry) = inner.strings.remove(&key) {
            inner.translations.retain(|(id, _), _| *id != entry.id);
        }
    }

    fn string_id(&self, context: &str, name: &str) -> Option<StringId> {
        self.inner
            .lock()
            .unwrap()
            .strings
            .get(&(context.to_string(), name.to_string()))
            .map(|entry| entry.id)
    }

    fn string_language(&self, context: &str, name: &str) -> Option<Language> {
        self.inner
            .lock()
            .unwrap()
            .strings
            .get(&(context.to_string(), name.to_string()))
            .and_then(|entry| entry.language.clone())
    }

    fn translate_string(&self, text: &str, context: &str, name: &str) -> String {
        let inner = self.inner.lock().unwrap();

        let Some(current) = inner.current.clone() else {
            return text.to_string();
        };
        let Some(entry) = inner
            .strings
            .get(&(context.to_string(), name.to_string()))
        else {
            return text.to_string();
        };

        inner
            .translations
            .get(&(entry.id, current))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn add_string_translation(
        &self,
        string_id: StringId,
        language: &Language,
        text: &str,
        _status: TranslationStatus,
    ) -> TranslationId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_translation_id;
        inner.next_translation_id += 1;
        inner
            .translations
            .insert((string_id, language.clone()), text.to_string());
        id
    }

    fn remap_object_id(
        &self,
        id: RecordId,
        object: &ObjectKind<'_>,
        display_as_translated_fallback: bool,
        target: Option<&Language>,
    ) -> Option<RecordId> {
        let inner = self.inner.lock().unwrap();
        let Some(target) = target.cloned().or_else(|| inner.current.clone()) else {
            return Some(id);
        };

        let (tax, name) = kind_key(object);
        if inner.object_language.get(&(tax, name.clone(), id)) == Some(&target) {
            return Some(id);
        }
        if let Some(variant) = inner.object_variants.get(&(tax, name, id, target)) {
            return Some(*variant);
        }

        if display_as_translated_fallback {
            Some(id)
        } else {
            None
        }
    }

    fn is_translated(&self, object: &ObjectKind<'_>) -> bool {
        self.inner.lock().unwrap().modes.get(&kind_key(object))
            == Some(&TranslationMode::Translatable)
    }

    fn is_display_as_translated(&self, object: &ObjectKind<'_>) -> bool {
        self.inner.lock().unwrap().modes.get(&kind_key(object))
            == Some(&TranslationMode::DisplayAsTranslated)
    }

    fn taxonomy_support(&self) -> bool {
        self.inner.lock().unwrap().taxonomy_support
    }

    fn switch_language(&self, language: &Language) {
        let mut inner = self.inner.lock().unwrap();
        inner.switches.push(language.clone());
        inner.current = Some(language.clone());
    }
}
