//! Per-feature compatibility adapters.
//!
//! Each module covers one host feature area and wires its records into the
//! shared registration, substitution, guard, and remapping machinery.

pub mod activity;
pub mod albums;
pub mod custom_fields;
pub mod documents;
pub mod groups;
pub mod profile;
pub mod topics;
