// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a tab identifier.
///
/// Tab identifiers are opaque strings assigned by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId {
    /// The identifier value.
    value: String,
}

impl TabId {
    /// Creates a new `TabId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents a form template identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId {
    /// The identifier value.
    value: String,
}

impl TemplateId {
    /// Creates a new `TemplateId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents a scheduling role identifier.
///
/// Scheduling roles are roster assignments (e.g., "Zamboni Operator",
/// "Front Desk"). They are reused to gate tab visibility and are distinct
/// from the coarse application-level role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId {
    /// The identifier value.
    value: String,
}

impl RoleId {
    /// Creates a new `RoleId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents the data-entry type of a template field.
///
/// Only `Checkbox` changes fill-detection semantics. Every other type,
/// including values this enum does not recognize, is treated as free
/// input that counts as filled when present and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Numeric input.
    Number,
    /// Date input.
    Date,
    /// Selection from a fixed option list.
    Select,
    /// Boolean checkbox.
    Checkbox,
    /// Any type not recognized by this version of the engine.
    ///
    /// Unknown wire values deserialize here instead of failing, so a
    /// newer catalog never breaks an older consumer.
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Parses a field type from its string representation.
    ///
    /// Unrecognized strings map to `Other`; parsing never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "text_area" => Self::TextArea,
            "number" => Self::Number,
            "date" => Self::Date,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            _ => Self::Other,
        }
    }

    /// Returns the string representation of this field type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "text_area",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Other => "other",
        }
    }

    /// Returns whether this type uses checkbox fill semantics.
    #[must_use]
    pub const fn is_checkbox(&self) -> bool {
        matches!(self, Self::Checkbox)
    }
}

/// A value submitted for one template field.
///
/// Absence from the submitted map models a field the user never touched;
/// `Null` models an explicitly cleared value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean value (checkbox state).
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A text value. May be empty.
    Text(String),
    /// An explicit null.
    Null,
}

/// Represents one field definition within a form template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateField {
    /// The field name (unique within the template's field list).
    pub field_name: String,
    /// The label shown to the user.
    pub label: String,
    /// The data-entry type.
    pub field_type: FieldType,
    /// Whether this field must be filled for the tab to be complete.
    pub is_required: bool,
    /// Optional default value applied by the form layer.
    pub default_value: Option<FieldValue>,
}

impl TemplateField {
    /// Creates a new `TemplateField` with no default value.
    ///
    /// # Arguments
    ///
    /// * `field_name` - The field name
    /// * `label` - The display label
    /// * `field_type` - The data-entry type
    /// * `is_required` - Whether the field is required
    #[must_use]
    pub fn new(field_name: &str, label: &str, field_type: FieldType, is_required: bool) -> Self {
        Self {
            field_name: field_name.to_owned(),
            label: label.to_owned(),
            field_type,
            is_required,
            default_value: None,
        }
    }

    /// Returns whether the submitted value fills this field.
    ///
    /// Checkbox fields are filled only by an exact boolean `true`. Every
    /// other type is filled by any value that is present, not `Null`,
    /// and not the empty string.
    ///
    /// # Arguments
    ///
    /// * `value` - The submitted value, if any
    #[must_use]
    pub fn is_filled(&self, value: Option<&FieldValue>) -> bool {
        if self.field_type.is_checkbox() {
            return matches!(value, Some(FieldValue::Bool(true)));
        }
        match value {
            None | Some(FieldValue::Null) => false,
            Some(FieldValue::Text(text)) => !text.is_empty(),
            Some(FieldValue::Bool(_) | FieldValue::Number(_)) => true,
        }
    }
}

/// Represents a reusable form template attached to a tab.
///
/// The engine only ever reads the configuration snapshot it is handed;
/// template versioning happens upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTemplate {
    /// The template identifier.
    pub template_id: TemplateId,
    /// The template name.
    pub name: String,
    /// The ordered field definitions.
    pub fields: Vec<TemplateField>,
}

impl FormTemplate {
    /// Creates a new `FormTemplate`.
    ///
    /// # Arguments
    ///
    /// * `template_id` - The template identifier
    /// * `name` - The template name
    /// * `fields` - The ordered field definitions
    #[must_use]
    pub fn new(template_id: TemplateId, name: &str, fields: Vec<TemplateField>) -> Self {
        Self {
            template_id,
            name: name.to_owned(),
            fields,
        }
    }

    /// Returns the fields with `is_required = true`.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&TemplateField> {
        self.fields.iter().filter(|f| f.is_required).collect()
    }
}

/// Represents a named section of a daily report.
///
/// Tabs are configured by facility administrators and referenced, never
/// owned, by report submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// The tab identifier.
    pub tab_id: TabId,
    /// The display name.
    pub name: String,
    /// Whether this tab must be complete for the report to be submittable.
    pub is_required: bool,
    /// Whether this tab is currently part of the report.
    pub is_active: bool,
    /// Position among active tabs. Values need not be contiguous;
    /// ties are broken by `tab_id`.
    pub display_order: i32,
    /// The attached form template, if any. `None` means the tab uses the
    /// free-form checklist shape.
    pub form_template_id: Option<TemplateId>,
    /// Scheduling roles allowed to see this tab. Empty means visible to
    /// everyone.
    pub role_restrictions: Vec<RoleId>,
}

impl Tab {
    /// Creates a new active, unrestricted, non-required tab with no
    /// attached template.
    ///
    /// # Arguments
    ///
    /// * `tab_id` - The tab identifier
    /// * `name` - The display name
    /// * `display_order` - Position among active tabs
    #[must_use]
    pub fn new(tab_id: TabId, name: &str, display_order: i32) -> Self {
        Self {
            tab_id,
            name: name.to_owned(),
            is_required: false,
            is_active: true,
            display_order,
            form_template_id: None,
            role_restrictions: Vec::new(),
        }
    }
}

/// The per-report, per-tab payload a user is filling in.
///
/// Which variant is semantically active is decided by the tab's
/// `form_template_id`, not by which variant happens to be stored. A
/// payload whose shape disagrees with the tab's template resolution is
/// treated as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabFormData {
    /// Values for a template-backed tab, keyed by field name.
    TemplateFields {
        /// Submitted values keyed by field name.
        values: HashMap<String, FieldValue>,
    },
    /// Free-form checklist plus notes for a tab with no template.
    Checklist {
        /// Checklist items keyed by item name.
        items: HashMap<String, bool>,
        /// Free-text notes.
        notes: String,
    },
}

impl TabFormData {
    /// Creates an empty template-backed payload.
    #[must_use]
    pub fn empty_fields() -> Self {
        Self::TemplateFields {
            values: HashMap::new(),
        }
    }

    /// Creates an empty free-form payload.
    #[must_use]
    pub fn empty_checklist() -> Self {
        Self::Checklist {
            items: HashMap::new(),
            notes: String::new(),
        }
    }
}
