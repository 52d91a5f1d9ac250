use anyhow::{Context, Result};

/// Default namespacing context under which this layer registers strings.
pub const DEFAULT_CONTEXT: &str = "Community Multilingual";

/// Default length cap for the sanitized option name embedded in option keys.
pub const DEFAULT_OPTION_NAME_LIMIT: usize = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Context (domain tag) grouping every string this layer registers.
    pub context: String,

    /// Maximum length of the sanitized option name used in option string keys.
    pub option_name_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            context: std::env::var("COMMUNITY_ML_CONTEXT")
                .unwrap_or_else(|_| DEFAULT_CONTEXT.to_string()),

            option_name_limit: match std::env::var("COMMUNITY_ML_OPTION_NAME_LIMIT") {
                Ok(raw) => raw
                    .parse()
                    .context("COMMUNITY_ML_OPTION_NAME_LIMIT must be a positive integer")?,
                Err(_) => DEFAULT_OPTION_NAME_LIMIT,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
            option_name_limit: DEFAULT_OPTION_NAME_LIMIT,
        }
    }
}
