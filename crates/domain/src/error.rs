// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{TabId, TemplateId};

/// Errors that can occur during catalog validation.
///
/// The completion and visibility computations themselves never fail;
/// these errors surface only when a tab catalog or template snapshot is
/// validated at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tab identifier is empty or invalid.
    InvalidTabId(String),
    /// Tab display name is empty or invalid.
    InvalidTabName {
        /// The tab whose name is invalid.
        tab_id: TabId,
    },
    /// Tab identifier appears more than once in a catalog.
    DuplicateTabId {
        /// The duplicate identifier.
        tab_id: TabId,
    },
    /// Template identifier is empty or invalid.
    InvalidTemplateId(String),
    /// Template name is empty or invalid.
    InvalidTemplateName {
        /// The template whose name is invalid.
        template_id: TemplateId,
    },
    /// Template identifier appears more than once in a snapshot.
    DuplicateTemplateId {
        /// The duplicate identifier.
        template_id: TemplateId,
    },
    /// Field name is empty or invalid.
    InvalidFieldName {
        /// The template containing the field.
        template_id: TemplateId,
    },
    /// Field name appears more than once within one template.
    DuplicateFieldName {
        /// The template containing the duplicate.
        template_id: TemplateId,
        /// The duplicate field name.
        field_name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTabId(msg) => write!(f, "Invalid tab identifier: {msg}"),
            Self::InvalidTabName { tab_id } => {
                write!(f, "Tab '{}' has an empty display name", tab_id.value())
            }
            Self::DuplicateTabId { tab_id } => {
                write!(
                    f,
                    "Tab identifier '{}' appears more than once in the catalog",
                    tab_id.value()
                )
            }
            Self::InvalidTemplateId(msg) => write!(f, "Invalid template identifier: {msg}"),
            Self::InvalidTemplateName { template_id } => {
                write!(
                    f,
                    "Template '{}' has an empty name",
                    template_id.value()
                )
            }
            Self::DuplicateTemplateId { template_id } => {
                write!(
                    f,
                    "Template identifier '{}' appears more than once",
                    template_id.value()
                )
            }
            Self::InvalidFieldName { template_id } => {
                write!(
                    f,
                    "Template '{}' contains a field with an empty name",
                    template_id.value()
                )
            }
            Self::DuplicateFieldName {
                template_id,
                field_name,
            } => {
                write!(
                    f,
                    "Field name '{field_name}' appears more than once in template '{}'",
                    template_id.value()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
