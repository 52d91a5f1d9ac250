//! Multilingual compatibility layer for community-platform content.
//!
//! Community features store admin- and user-authored free text (group
//! names, profile field labels, album titles) directly in their own rows,
//! outside any translation system. This crate bridges that gap with a
//! conditional substitution protocol: values register with an external
//! [`i18n::TranslationService`] when they are saved, and every read
//! substitutes the active language's translation when one exists, falling
//! back to the stored original otherwise.
//!
//! The save path is guarded: editing a record while browsing in a language
//! other than the one its strings were registered in captures the typed
//! text as a translation instead of letting it overwrite the canonical
//! value. Foreign-key profile values remap between language variants in
//! both directions.
//!
//! Per-feature wiring lives in [`adapters`]; the shared machinery is the
//! [`registrar`], [`substitute`], [`guard`], and [`resolver`] modules, with
//! key construction centralized in [`keys`].

pub mod adapters;
pub mod config;
pub mod error;
pub mod guard;
pub mod i18n;
pub mod keys;
pub mod record;
pub mod registrar;
pub mod resolver;
pub mod substitute;

pub use config::Config;
pub use error::Error;
pub use guard::SaveGuard;
pub use i18n::{
    InMemoryTranslationService, Language, ObjectKind, ObjectRef, TranslationMode,
    TranslationService,
};
pub use record::{Record, RecordId, RecordStore, SaveTracker};
pub use substitute::FieldTranslator;
