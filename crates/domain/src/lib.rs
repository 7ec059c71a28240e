// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod completion;
mod error;
mod readiness;
mod tab_order;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use completion::{
    CompletionOptions, CompletionSummary, OverallProgress, TabCompletionStatus,
    evaluate_report_completion, evaluate_tab_completion,
};
pub use readiness::{SubmissionReadiness, evaluate_submission_readiness};
pub use tab_order::order_active_tabs;

// Re-export public types
pub use error::DomainError;
pub use types::{
    FieldType, FieldValue, FormTemplate, RoleId, Tab, TabFormData, TabId, TemplateField,
    TemplateId,
};
pub use validation::{validate_tab, validate_tabs, validate_template, validate_templates};
