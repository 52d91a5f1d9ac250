//! Extended profile fields, field groups, and field options.
//!
//! Profile metadata is admin-authored free text: field names, descriptions,
//! alternate names, group names, and the option labels of choice-based
//! fields. Everything registers on save under `profile field {id} ...` and
//! `profile group {id} ...` keys; the read path substitutes both plain
//! values and rendered form markup.

use crate::error::Error;
use crate::i18n::TranslationService;
use crate::keys;
use crate::record::RecordId;
use crate::registrar::register_value;
use crate::substitute::{
    patch_label_html, patch_option_html, substitute_multi_value, substitute_single_value,
    translate_value,
};
use std::str::FromStr;
use tracing::warn;

/// The host's profile field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    TextBox,
    TextArea,
    DateBox,
    Url,
    Number,
    Radio,
    Checkbox,
    SelectBox,
    MultiSelectBox,
}

impl FieldType {
    /// Whether the type carries admin-defined option labels.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            FieldType::Radio | FieldType::Checkbox | FieldType::SelectBox | FieldType::MultiSelectBox
        )
    }

    /// Whether a member's stored value can hold several options.
    pub fn is_multi(self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::MultiSelectBox)
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "textbox" => Ok(FieldType::TextBox),
            "textarea" => Ok(FieldType::TextArea),
            "datebox" => Ok(FieldType::DateBox),
            "url" => Ok(FieldType::Url),
            "number" => Ok(FieldType::Number),
            "radio" => Ok(FieldType::Radio),
            "checkbox" => Ok(FieldType::Checkbox),
            "selectbox" => Ok(FieldType::SelectBox),
            "multiselectbox" => Ok(FieldType::MultiSelectBox),
            other => Err(Error::UnknownFieldType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub id: Option<RecordId>,
    pub group_id: RecordId,
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
}

/// One option of a choice-based field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFieldGroup {
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
}

/// One field's entry in a member profile listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfileData {
    pub field_id: RecordId,
    pub field_name: String,
    pub value: String,
}

/// Read access to the host's profile schema.
pub trait ProfileStore {
    fn fields(&self) -> Vec<ProfileField>;
    fn field(&self, id: RecordId) -> Option<ProfileField>;
    fn field_id_by_name(&self, name: &str) -> Option<RecordId>;
    fn field_options(&self, field_id: RecordId) -> Vec<FieldOption>;
    fn field_alternate_name(&self, field_id: RecordId) -> Option<String>;
    fn field_groups(&self) -> Vec<ProfileFieldGroup>;
    fn group_id_by_name(&self, name: &str) -> Option<RecordId>;
}

/// Findings from a registration audit of the whole profile schema.
#[derive(Debug, Default, serde::Serialize)]
pub struct ScanReport {
    pub warnings: Vec<String>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Save path
// ---------------------------------------------------------------------------

/// Register a saved field's name, description, and option labels.
///
/// The host's save event sometimes fires before the field struct carries
/// its id; the id is then recovered by name lookup.
pub fn saved_field<S, St>(
    service: &S,
    store: &St,
    context: &str,
    field: &ProfileField,
    name_limit: usize,
) where
    S: TranslationService,
    St: ProfileStore,
{
    let Some(id) = field.id.or_else(|| store.field_id_by_name(&field.name)) else {
        warn!(name = %field.name, "saved field has no recoverable id");
        return;
    };

    register_value(service, context, &keys::profile_field(id, "name"), &field.name, None);
    register_value(
        service,
        context,
        &keys::profile_field(id, "description"),
        &field.description,
        None,
    );

    if field.field_type.has_options() {
        for option in store.field_options(id) {
            register_value(
                service,
                context,
                &keys::profile_field_option(id, &option.name, "name", name_limit),
                &option.name,
                None,
            );
            register_value(
                service,
                context,
                &keys::profile_field_option(id, &option.name, "description", name_limit),
                &option.description,
                None,
            );
        }
    }
}

/// Drop every string registered for a deleted field.
pub fn deleted_field<S, St>(
    service: &S,
    store: &St,
    context: &str,
    field: &ProfileField,
    name_limit: usize,
) where
    S: TranslationService,
    St: ProfileStore,
{
    let Some(id) = field.id else {
        return;
    };

    service.unregister_string(context, &keys::profile_field(id, "name"));
    service.unregister_string(context, &keys::profile_field(id, "description"));
    service.unregister_string(context, &keys::profile_field(id, "alternate name"));
    for option in store.field_options(id) {
        service.unregister_string(
            context,
            &keys::profile_field_option(id, &option.name, "name", name_limit),
        );
        service.unregister_string(
            context,
            &keys::profile_field_option(id, &option.name, "description", name_limit),
        );
    }
}

/// Register a saved field group's name and description.
pub fn saved_group<S: TranslationService>(service: &S, context: &str, group: &ProfileFieldGroup) {
    let Some(id) = group.id else {
        return;
    };
    register_value(service, context, &keys::profile_group(id, "name"), &group.name, None);
    register_value(
        service,
        context,
        &keys::profile_group(id, "description"),
        &group.description,
        None,
    );
}

/// Drop a deleted field group's strings.
pub fn deleted_group<S: TranslationService>(service: &S, context: &str, group: &ProfileFieldGroup) {
    let Some(id) = group.id else {
        return;
    };
    service.unregister_string(context, &keys::profile_group(id, "name"));
    service.unregister_string(context, &keys::profile_group(id, "description"));
}

/// Register a field's alternate display name when one is saved.
pub fn alternate_name_saved<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    value: &str,
) {
    register_value(
        service,
        context,
        &keys::profile_field(field_id, "alternate name"),
        value,
        None,
    );
}

/// Drop a field's alternate name string when it is cleared.
pub fn alternate_name_deleted<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
) {
    service.unregister_string(context, &keys::profile_field(field_id, "alternate name"));
}

// ---------------------------------------------------------------------------
// Read path
// ---------------------------------------------------------------------------

pub fn translate_field_name<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    name: &str,
) -> String {
    translate_value(service, name, context, &keys::profile_field(field_id, "name"))
}

pub fn translate_field_description<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    description: &str,
) -> String {
    translate_value(
        service,
        description,
        context,
        &keys::profile_field(field_id, "description"),
    )
}

pub fn translate_alternate_name<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    name: &str,
) -> String {
    translate_value(
        service,
        name,
        context,
        &keys::profile_field(field_id, "alternate name"),
    )
}

/// Translate the label of one option of a field.
pub fn translate_option_name<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    option_name: &str,
    name_limit: usize,
) -> String {
    translate_value(
        service,
        option_name,
        context,
        &keys::profile_field_option(field_id, option_name, "name", name_limit),
    )
}

/// Substitute option descriptions on the field edit screen. Option names
/// stay untouched here; the stored member values reference them verbatim
/// and a renamed label would break form submission.
pub fn translate_options<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    options: &mut [FieldOption],
    name_limit: usize,
) {
    for option in options.iter_mut() {
        option.description = translate_value(
            service,
            &option.description,
            context,
            &keys::profile_field_option(field_id, &option.name, "description", name_limit),
        );
    }
}

/// Patch the rendered markup of one radio or checkbox option.
pub fn translate_choice_html<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    option_name: &str,
    html: &str,
    name_limit: usize,
) -> String {
    let translated = translate_option_name(service, context, field_id, option_name, name_limit);
    if translated == option_name {
        return html.to_string();
    }
    patch_label_html(html, option_name, &translated)
}

/// Patch the rendered markup of one select or multiselect option.
pub fn translate_select_html<S: TranslationService>(
    service: &S,
    context: &str,
    field_id: RecordId,
    option_name: &str,
    html: &str,
    name_limit: usize,
) -> String {
    let translated = translate_option_name(service, context, field_id, option_name, name_limit);
    if translated == option_name {
        return html.to_string();
    }
    patch_option_html(html, &translated)
}

/// Substitute option labels inside a rendered profile value.
///
/// `value` is the host's rendered output (possibly wrapped in search links),
/// `raw` the stored member value the rendering came from. Fields without
/// options pass through.
pub fn translate_profile_view_value<S, St>(
    service: &S,
    store: &St,
    context: &str,
    value: &str,
    raw: &str,
    field_id: RecordId,
    name_limit: usize,
) -> String
where
    S: TranslationService,
    St: ProfileStore,
{
    let Some(field) = store.field(field_id) else {
        return value.to_string();
    };
    if !field.field_type.has_options() {
        return value.to_string();
    }

    let mut out = value.to_string();
    if field.field_type.is_multi() {
        for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let translated = translate_option_name(service, context, field_id, item, name_limit);
            if translated != item {
                out = substitute_multi_value(&out, item, &translated);
            }
        }
    } else {
        let translated = translate_option_name(service, context, field_id, raw, name_limit);
        if translated != raw {
            out = substitute_single_value(&out, raw, &translated);
        }
    }
    out
}

/// Translate a field group name shown as a profile tab, resolved by name.
pub fn translate_group_name<S, St>(service: &S, store: &St, context: &str, name: &str) -> String
where
    S: TranslationService,
    St: ProfileStore,
{
    match store.group_id_by_name(name) {
        Some(id) => translate_value(service, name, context, &keys::profile_group(id, "name")),
        None => name.to_string(),
    }
}

/// Substitute field names and values in a member profile listing.
pub fn translate_member_data<S, St>(
    service: &S,
    store: &St,
    context: &str,
    entries: &mut [MemberProfileData],
    name_limit: usize,
) where
    S: TranslationService,
    St: ProfileStore,
{
    for entry in entries.iter_mut() {
        entry.field_name =
            translate_field_name(service, context, entry.field_id, &entry.field_name);
        let raw = entry.value.clone();
        entry.value = translate_profile_view_value(
            service,
            store,
            context,
            &raw,
            &raw,
            entry.field_id,
            name_limit,
        );
    }
}

// ---------------------------------------------------------------------------
// Bulk registration and audit
// ---------------------------------------------------------------------------

/// Register every group, field, alternate name, and option in the schema.
/// Intended for first activation and for repairing a wiped string table.
pub fn register_all<S, St>(service: &S, store: &St, context: &str, name_limit: usize)
where
    S: TranslationService,
    St: ProfileStore,
{
    for group in store.field_groups() {
        saved_group(service, context, &group);
    }
    for field in store.fields() {
        saved_field(service, store, context, &field, name_limit);
        if let Some(id) = field.id {
            if let Some(alternate) = store.field_alternate_name(id) {
                alternate_name_saved(service, context, id, &alternate);
            }
        }
    }
}

/// Audit the schema against the string table without modifying anything.
pub fn scan<S, St>(service: &S, store: &St, context: &str, name_limit: usize) -> ScanReport
where
    S: TranslationService,
    St: ProfileStore,
{
    let mut report = ScanReport::default();
    let mut check = |name: String, what: String| {
        if !service.is_string_registered(context, &name) {
            report.warnings.push(format!("{} is not registered ({})", what, name));
        }
    };

    for group in store.field_groups() {
        let Some(id) = group.id else { continue };
        check(
            keys::profile_group(id, "name"),
            format!("group '{}' name", group.name),
        );
    }
    for field in store.fields() {
        let Some(id) = field.id else { continue };
        check(
            keys::profile_field(id, "name"),
            format!("field '{}' name", field.name),
        );
        if !field.description.is_empty() {
            check(
                keys::profile_field(id, "description"),
                format!("field '{}' description", field.name),
            );
        }
        if field.field_type.has_options() {
            for option in store.field_options(id) {
                check(
                    keys::profile_field_option(id, &option.name, "name", name_limit),
                    format!("field '{}' option '{}'", field.name, option.name),
                );
            }
        }
    }
    report
}
