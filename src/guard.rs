//! Original-value preservation on the save path.
//!
//! When a user edits a record while browsing in a language other than the
//! one its text was registered in, the in-memory payload carries translated
//! text. Persisting that payload as-is would overwrite the canonical row.
//! The guard intercepts the save: the translated text is captured as a
//! translation of the registered string, and the payload attribute is reset
//! to the stored original before the host writes it back.
//!
//! Host save pipelines fire a pre-save and a post-save event per physical
//! save, and some fire the pair twice. A per-request [`SaveTracker`] keeps
//! the sequence idempotent per record id.

use crate::i18n::{TranslationMetrics, TranslationService, TranslationStatus};
use crate::record::{Record, RecordId, RecordStore, SaveTracker, StringNaming};
use crate::registrar::{register_record, register_unless_processed};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Save-path interceptor for one record kind.
///
/// `before_save` runs on the pre-save event with the mutable payload,
/// `after_save` on the post-save event once the row is persisted. One guard
/// instance lives for one request.
pub struct SaveGuard<'a, S, St> {
    service: &'a S,
    store: &'a St,
    context: &'a str,
    naming: StringNaming,
    attributes: &'static [&'static str],
    tracker: SaveTracker,
    pending: HashMap<(RecordId, &'static str), String>,
}

impl<'a, S, St> SaveGuard<'a, S, St>
where
    S: TranslationService,
    St: RecordStore,
{
    pub fn new(
        service: &'a S,
        store: &'a St,
        context: &'a str,
        naming: StringNaming,
        attributes: &'static [&'static str],
    ) -> Self {
        Self {
            service,
            store,
            context,
            naming,
            attributes,
            tracker: SaveTracker::new(),
            pending: HashMap::new(),
        }
    }

    /// Capture translated payload values and restore canonical originals.
    ///
    /// Does nothing for unsaved records or for records already processed in
    /// this request. Each attribute is compared against the language its
    /// string was registered in: an edit made in that same language is a
    /// legitimate source-text change and falls through to plain
    /// re-registration in [`Self::after_save`], as do attributes whose
    /// string was never registered or whose stored original cannot be read
    /// back.
    pub fn before_save<R: Record>(&mut self, record: &mut R) {
        let Some(id) = record.id() else {
            return;
        };
        if self.tracker.contains(id) {
            debug!(id, "save already processed in this request");
            return;
        }

        let Some(current) = self.service.current_language() else {
            return;
        };

        for attribute in self.attributes {
            let name = (self.naming)(id, attribute);
            let Some(string_id) = self.service.string_id(self.context, &name) else {
                debug!(id, attribute, "string not registered, skipping capture");
                continue;
            };
            match self.service.string_language(self.context, &name) {
                Some(registered) if registered != current => {}
                _ => continue,
            }
            let Some(original) = self.store.attribute(id, attribute) else {
                warn!(id, attribute, "stored original unavailable, skipping capture");
                continue;
            };

            if let Some(incoming) = record.attribute(attribute).filter(|v| !v.is_empty()) {
                self.service.add_string_translation(
                    string_id,
                    &current,
                    incoming,
                    TranslationStatus::Complete,
                );
                TranslationMetrics::global().record_translation_captured();
                self.pending.insert((id, *attribute), incoming.to_string());
            }
            record.set_attribute(attribute, original);
        }
    }

    /// Register the persisted canonical values, then put the text the user
    /// actually typed back into the in-memory record so the response shows
    /// it, and mark the record as processed for the rest of the request.
    pub fn after_save<R: Record>(&mut self, record: &mut R) {
        let Some(id) = record.id() else {
            return;
        };

        for attribute in self.attributes {
            if let Some(value) = record.attribute(attribute) {
                let name = (self.naming)(id, attribute);
                // An existing string keeps its source language; a first-time
                // registration takes the request language.
                let registered = self.service.string_language(self.context, &name);
                register_unless_processed(
                    self.service,
                    &self.tracker,
                    self.context,
                    id,
                    &name,
                    value,
                    registered.as_ref(),
                );
            }
        }

        let mut restored = false;
        for attribute in self.attributes {
            if let Some(text) = self.pending.remove(&(id, *attribute)) {
                record.set_attribute(attribute, text);
                restored = true;
            }
        }
        if restored {
            // Downstream per-language string caches saw the new translation
            // mid-request and need a refresh signal.
            if let Some(current) = self.service.current_language() {
                self.service.switch_language(&current);
            }
        }

        self.tracker.mark(id);
    }
}

/// Single-shot variant of the guard for hosts that expose one edit event
/// instead of a pre/post pair.
///
/// When the request renders in a language other than the one the record's
/// strings were registered in, the request is switched to that source
/// language while the canonical payload is reconstructed, then switched
/// back. Translated incoming values are captured before the reset, and the
/// canonical values are re-registered under the source language. A record
/// with no registered strings yet registers plainly in the request language.
pub fn save_edited_fields<S, St, R>(
    service: &S,
    store: &St,
    context: &str,
    record: &mut R,
    naming: StringNaming,
    attributes: &[&str],
) where
    S: TranslationService,
    St: RecordStore,
    R: Record,
{
    let Some(id) = record.id() else {
        return;
    };
    let Some(current) = service.current_language() else {
        register_record(service, context, record, naming, attributes, None);
        return;
    };

    // Attributes of one record are registered together, so the first
    // registered one carries the record's source language.
    let source = attributes
        .iter()
        .find_map(|attribute| service.string_language(context, &naming(id, attribute)));

    match source {
        Some(source) if source != current => {
            service.switch_language(&source);
            for attribute in attributes {
                let name = naming(id, attribute);
                if let Some(string_id) = service.string_id(context, &name) {
                    if let Some(incoming) = record.attribute(attribute).filter(|v| !v.is_empty()) {
                        service.add_string_translation(
                            string_id,
                            &current,
                            incoming,
                            TranslationStatus::Complete,
                        );
                        TranslationMetrics::global().record_translation_captured();
                    }
                }
                if let Some(original) = store.attribute(id, attribute) {
                    record.set_attribute(attribute, original);
                }
            }
            service.switch_language(&current);
            register_record(service, context, record, naming, attributes, Some(&source));
        }
        _ => register_record(service, context, record, naming, attributes, None),
    }
}
