//! Internationalization (i18n) module.
//!
//! Language identity, translation modes, the external translation-management
//! service contract, and the observability around it all live here.
//!
//! # Architecture
//!
//! - `language`: validated language-code type shared by every contract
//! - `mode`: translation modes and typed object references
//! - `service`: the `TranslationService` trait the host platform implements
//! - `memory`: in-memory reference implementation backing the test suite
//! - `metrics`: translation observability counters

mod language;
mod memory;
mod metrics;
mod mode;
mod service;

pub use language::Language;
pub use memory::InMemoryTranslationService;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use mode::{ObjectKind, ObjectRef, TranslationMode};
pub use service::{StringId, TranslationId, TranslationService, TranslationStatus};
