//! Activity feed topic names.
//!
//! Topics carry both their own row id and a `topic_id` pointing at the
//! canonical topic. A newly created per-language copy has `id != topic_id`
//! and must not register a string of its own; the canonical topic's key is
//! shared by every copy.

use crate::i18n::TranslationService;
use crate::keys;
use crate::record::RecordId;
use crate::registrar::register_value;
use crate::substitute::translate_value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: RecordId,
    pub topic_id: RecordId,
    pub name: String,
}

impl Topic {
    fn string_name(&self) -> String {
        keys::activity_topic(self.topic_id, "name")
    }

    fn is_canonical(&self) -> bool {
        self.id == self.topic_id
    }
}

/// Register a newly added topic. Per-language copies are skipped.
pub fn topic_added<S: TranslationService>(service: &S, context: &str, topic: &Topic) {
    if !topic.is_canonical() {
        return;
    }
    register_value(service, context, &topic.string_name(), &topic.name, None);
}

/// Re-register a topic after an update, refreshing the canonical value.
pub fn topic_updated<S: TranslationService>(service: &S, context: &str, topic: &Topic) {
    register_value(service, context, &topic.string_name(), &topic.name, None);
}

/// Substitute one topic name in place.
pub fn translate_topic<S: TranslationService>(service: &S, context: &str, topic: &mut Topic) {
    topic.name = translate_value(service, &topic.name, context, &topic.string_name());
}

/// Substitute every topic in a listing.
pub fn translate_topics<S: TranslationService>(service: &S, context: &str, topics: &mut [Topic]) {
    for topic in topics.iter_mut() {
        translate_topic(service, context, topic);
    }
}
