//! Deterministic string-key naming.
//!
//! Both the registrar and the read-path filters must compute the exact same
//! key for the same (record id, attribute) pair, in every language, or
//! registrations and lookups silently disagree. All key construction lives
//! here; nothing in a key may depend on the current language.

use crate::record::RecordId;
use regex::Regex;
use std::sync::OnceLock;

/// Prefix for profile-field string names.
pub const FIELD_PREFIX: &str = "profile field ";

/// Prefix for profile-field-group string names.
pub const GROUP_PREFIX: &str = "profile group ";

static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Key for a social group attribute, e.g. `Group #5 name`.
pub fn group(id: RecordId, attribute: &str) -> String {
    format!("Group #{} {}", id, attribute)
}

/// Key for a media album attribute, e.g. `Media album #3 title`.
pub fn media_album(id: RecordId, attribute: &str) -> String {
    format!("Media album #{} {}", id, attribute)
}

/// Key for a document folder attribute, e.g. `Document folder #7 title`.
pub fn document_folder(id: RecordId, attribute: &str) -> String {
    format!("Document folder #{} {}", id, attribute)
}

/// Key for an activity topic attribute, e.g. `Activity topic #9 name`.
pub fn activity_topic(id: RecordId, attribute: &str) -> String {
    format!("Activity topic #{} {}", id, attribute)
}

/// Key for a profile field attribute, e.g. `profile field 2 name`.
pub fn profile_field(id: RecordId, attribute: &str) -> String {
    format!("{}{} {}", FIELD_PREFIX, id, attribute)
}

/// Key for a profile field group attribute, e.g. `profile group 1 name`.
pub fn profile_group(id: RecordId, attribute: &str) -> String {
    format!("{}{} {}", GROUP_PREFIX, id, attribute)
}

/// Key for one option of a profile field, keyed by the option's own
/// (sanitized, length-capped) name rather than a positional index, so that
/// reordering options does not orphan their translations.
pub fn profile_field_option(
    field_id: RecordId,
    option_name: &str,
    attribute: &str,
    name_limit: usize,
) -> String {
    format!(
        "{}{} - option '{}' {}",
        FIELD_PREFIX,
        field_id,
        sanitize_string_name(option_name, name_limit),
        attribute
    )
}

/// Reduce a free-text value to a stable key fragment: markup stripped,
/// control characters removed, whitespace collapsed, capped at `limit`
/// characters.
pub fn sanitize_string_name(name: &str, limit: usize) -> String {
    let markup = MARKUP_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    let stripped = markup.replace_all(name, " ");

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() || ch.is_control() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }

    match out.char_indices().nth(limit) {
        Some((byte_index, _)) => out[..byte_index].trim_end().to_string(),
        None => out,
    }
}
