use thiserror::Error;

/// Errors produced by the crate's constructor surface.
///
/// Read-path filters and save hooks never return errors: a translation-layer
/// failure must not interrupt the host platform's request lifecycle, so they
/// pass values through unchanged instead. Only code that builds typed values
/// out of untrusted host input can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    #[error("unknown profile field type: '{0}'")]
    UnknownFieldType(String),
}
