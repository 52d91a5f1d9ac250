//! Language type: validated language-code representation.
//!
//! Language codes originate in the external translation-management layer and
//! flow through this crate as opaque, validated identifiers. Equality on
//! `Language` is what every callback contract in the crate compares.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated language code.
///
/// Accepts ISO 639-1 style codes with optional lowercase subtags
/// (e.g. "en", "fr", "pt-br", "zh-hans").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    code: String,
}

impl Language {
    /// Create a Language from a code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is well-formed
    /// * `Err(Error::InvalidLanguageCode)` otherwise
    pub fn from_code(code: &str) -> Result<Language, Error> {
        if Self::is_valid_code(code) {
            Ok(Language {
                code: code.to_string(),
            })
        } else {
            Err(Error::InvalidLanguageCode(code.to_string()))
        }
    }

    /// The language code as a string slice (e.g. "en", "pt-br").
    pub fn code(&self) -> &str {
        &self.code
    }

    fn is_valid_code(code: &str) -> bool {
        if code.len() < 2 || code.len() > 11 {
            return false;
        }

        let mut segments = 0;
        for segment in code.split('-') {
            segments += 1;
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_lowercase()) {
                return false;
            }
        }

        segments <= 3
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::from_code(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> String {
        language.code
    }
}
