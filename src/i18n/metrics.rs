//! Translation metrics and observability module.
//!
//! Counts what the substitution layer actually does at runtime: strings
//! registered, translations applied or passed through, translations captured
//! by the save guard, and foreign-key remap outcomes.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Translatable strings registered (or re-registered) with the service
    strings_registered: AtomicUsize,

    /// Read-path substitutions where a translation replaced the value
    substitutions_applied: AtomicUsize,

    /// Read-path substitutions where the value passed through unchanged
    substitutions_passed: AtomicUsize,

    /// Translations captured by the save guard instead of hitting storage
    translations_captured: AtomicUsize,

    /// Foreign-key ids remapped to a different variant
    ids_remapped: AtomicUsize,

    /// Foreign-key ids dropped because no variant or fallback existed
    ids_dropped: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            strings_registered: AtomicUsize::new(0),
            substitutions_applied: AtomicUsize::new(0),
            substitutions_passed: AtomicUsize::new(0),
            translations_captured: AtomicUsize::new(0),
            ids_remapped: AtomicUsize::new(0),
            ids_dropped: AtomicUsize::new(0),
        })
    }

    pub fn record_registration(&self) {
        self.strings_registered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_substitution_applied(&self) {
        self.substitutions_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_substitution_passed(&self) {
        self.substitutions_passed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_captured(&self) {
        self.translations_captured.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_id_remapped(&self) {
        self.ids_remapped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_id_dropped(&self) {
        self.ids_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn strings_registered(&self) -> usize {
        self.strings_registered.load(Ordering::Relaxed)
    }

    pub fn substitutions_applied(&self) -> usize {
        self.substitutions_applied.load(Ordering::Relaxed)
    }

    pub fn substitutions_passed(&self) -> usize {
        self.substitutions_passed.load(Ordering::Relaxed)
    }

    pub fn translations_captured(&self) -> usize {
        self.translations_captured.load(Ordering::Relaxed)
    }

    pub fn ids_remapped(&self) -> usize {
        self.ids_remapped.load(Ordering::Relaxed)
    }

    pub fn ids_dropped(&self) -> usize {
        self.ids_dropped.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let applied = self.substitutions_applied();
        let passed = self.substitutions_passed();
        let total = applied + passed;
        let substitution_rate = if total > 0 {
            (applied as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            strings_registered: self.strings_registered(),
            substitutions_applied: applied,
            substitutions_passed: passed,
            substitution_rate,
            translations_captured: self.translations_captured(),
            ids_remapped: self.ids_remapped(),
            ids_dropped: self.ids_dropped(),
        }
    }

}

/// Point-in-time snapshot of translation activity.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub strings_registered: usize,
    pub substitutions_applied: usize,
    pub substitutions_passed: usize,

    /// Share of read-path lookups that found a translation (0-100)
    pub substitution_rate: f64,

    pub translations_captured: usize,
    pub ids_remapped: usize,
    pub ids_dropped: usize,
}
