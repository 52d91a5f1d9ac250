//! Borrowed-record seam between host rows and the translation layer.
//!
//! The host platform owns every record this crate touches. Adapters convert
//! host rows into small structs implementing [`Record`], and the save-path
//! machinery reads canonical values back through a [`RecordStore`] when the
//! in-memory payload cannot be trusted.

use std::collections::HashSet;

/// Primary key of a host record.
pub type RecordId = u64;

/// Computes the deterministic string name for one attribute of one record.
pub type StringNaming = fn(RecordId, &str) -> String;

/// A host record with an optional id and named free-text attributes.
///
/// `id()` is `None` for rows the host has not persisted yet (no primary key
/// assigned); every operation in this crate treats that as "nothing to do".
pub trait Record {
    fn id(&self) -> Option<RecordId>;

    /// Current value of a named attribute, if the record carries it.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Overwrite a named attribute in the in-memory payload only.
    fn set_attribute(&mut self, name: &str, value: String);
}

/// Read-back access to the host's persisted rows.
pub trait RecordStore {
    /// Fetch the stored value of one attribute by primary key. `None` when
    /// the row does not exist (yet).
    fn attribute(&self, id: RecordId, name: &str) -> Option<String>;
}

/// Per-request set of record ids that already went through a save sequence.
///
/// Host save pipelines legitimately fire both a pre-save and a post-save
/// event for one physical save; this set keeps the two halves idempotent.
#[derive(Debug, Default)]
pub struct SaveTracker {
    processed: HashSet<RecordId>,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, id: RecordId) {
        self.processed.insert(id);
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.processed.contains(&id)
    }
}
