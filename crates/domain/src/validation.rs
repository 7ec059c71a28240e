// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FormTemplate, Tab, TabId, TemplateId};
use std::collections::HashSet;

/// Validates that a tab's basic field constraints are met.
///
/// This function checks that required fields are not empty. It does NOT
/// check for uniqueness (that requires the surrounding catalog).
///
/// # Arguments
///
/// * `tab` - The tab to validate
///
/// # Errors
///
/// Returns an error if:
/// - The tab identifier is empty
/// - The display name is empty
pub fn validate_tab(tab: &Tab) -> Result<(), DomainError> {
    // Rule: tab identifier must not be empty
    if tab.tab_id.value().is_empty() {
        return Err(DomainError::InvalidTabId(String::from(
            "Tab identifier cannot be empty",
        )));
    }

    // Rule: display name must not be empty
    if tab.name.is_empty() {
        return Err(DomainError::InvalidTabName {
            tab_id: tab.tab_id.clone(),
        });
    }

    Ok(())
}

/// Validates a tab catalog.
///
/// Each tab is validated individually, and tab identifiers must be
/// unique across the whole catalog.
///
/// # Arguments
///
/// * `tabs` - The catalog to validate
///
/// # Errors
///
/// Returns the first per-tab validation error encountered, or
/// `DomainError::DuplicateTabId` if an identifier repeats.
pub fn validate_tabs(tabs: &[Tab]) -> Result<(), DomainError> {
    let mut seen: HashSet<&TabId> = HashSet::new();

    for tab in tabs {
        validate_tab(tab)?;
        if !seen.insert(&tab.tab_id) {
            return Err(DomainError::DuplicateTabId {
                tab_id: tab.tab_id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a form template.
///
/// # Arguments
///
/// * `template` - The template to validate
///
/// # Errors
///
/// Returns an error if:
/// - The template identifier or name is empty
/// - A field name is empty
/// - A field name appears more than once within the field list
pub fn validate_template(template: &FormTemplate) -> Result<(), DomainError> {
    if template.template_id.value().is_empty() {
        return Err(DomainError::InvalidTemplateId(String::from(
            "Template identifier cannot be empty",
        )));
    }

    if template.name.is_empty() {
        return Err(DomainError::InvalidTemplateName {
            template_id: template.template_id.clone(),
        });
    }

    // Rule: field names must be unique within one template's field list
    let mut seen: HashSet<&str> = HashSet::new();
    for field in &template.fields {
        if field.field_name.is_empty() {
            return Err(DomainError::InvalidFieldName {
                template_id: template.template_id.clone(),
            });
        }
        if !seen.insert(field.field_name.as_str()) {
            return Err(DomainError::DuplicateFieldName {
                template_id: template.template_id.clone(),
                field_name: field.field_name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a template snapshot.
///
/// Each template is validated individually, and template identifiers
/// must be unique across the snapshot.
///
/// # Arguments
///
/// * `templates` - The snapshot to validate
///
/// # Errors
///
/// Returns the first per-template validation error encountered, or
/// `DomainError::DuplicateTemplateId` if an identifier repeats.
pub fn validate_templates(templates: &[FormTemplate]) -> Result<(), DomainError> {
    let mut seen: HashSet<&TemplateId> = HashSet::new();

    for template in templates {
        validate_template(template)?;
        if !seen.insert(&template.template_id) {
            return Err(DomainError::DuplicateTemplateId {
                template_id: template.template_id.clone(),
            });
        }
    }

    Ok(())
}
