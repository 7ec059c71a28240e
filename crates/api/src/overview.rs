// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report overview assembly.
//!
//! This is the composition callers actually run: validate the
//! configuration snapshot, order the catalog, filter it down to what the
//! user may see, evaluate completion over the visible subset, and derive
//! submission readiness.

use crate::error::OverviewError;
use crate::roles::UserRoleContext;
use crate::view::{Capability, ReportOverview};
use crate::visibility::filter_visible_tabs;
use rinkops_domain::{
    CompletionOptions, FormTemplate, Tab, TabFormData, TabId, evaluate_report_completion,
    evaluate_submission_readiness, order_active_tabs, validate_tabs, validate_templates,
};
use std::collections::HashMap;
use time::Date;

/// Assembles the report overview for one user and one report date.
///
/// Completion is computed over the visible subset of tabs, so a staff
/// user is never blocked by a required tab they cannot see.
///
/// # Arguments
///
/// * `report_date` - The date the report covers
/// * `tabs` - The full tab catalog for the facility, in any order
/// * `drafts` - Draft payloads keyed by tab identifier
/// * `templates` - The current template snapshot
/// * `context` - The requesting user's resolved role assignments
/// * `options` - Completion evaluation knobs
///
/// # Errors
///
/// Returns `OverviewError::Configuration` if the tab catalog or template
/// snapshot fails validation. Derivation itself cannot fail.
pub fn build_report_overview(
    report_date: Date,
    tabs: &[Tab],
    drafts: &HashMap<TabId, TabFormData>,
    templates: &[FormTemplate],
    context: &UserRoleContext,
    options: &CompletionOptions,
) -> Result<ReportOverview, OverviewError> {
    if let Err(error) = validate_tabs(tabs) {
        tracing::warn!("Rejected tab catalog: {error}");
        return Err(OverviewError::Configuration(error));
    }
    if let Err(error) = validate_templates(templates) {
        tracing::warn!("Rejected template snapshot: {error}");
        return Err(OverviewError::Configuration(error));
    }

    let ordered: Vec<Tab> = order_active_tabs(tabs);
    let visible: Vec<Tab> = filter_visible_tabs(&ordered, context);
    let summary = evaluate_report_completion(&visible, drafts, templates, options);
    let readiness = evaluate_submission_readiness(&summary);

    tracing::debug!(
        "Report overview for {report_date}: {}/{} tabs complete, {} visible of {} active",
        summary.overall.completed,
        summary.overall.total,
        visible.len(),
        ordered.len()
    );

    let incomplete_required_tabs: Vec<TabId> = summary
        .incomplete_required
        .iter()
        .map(|status| status.tab_id.clone())
        .collect();

    Ok(ReportOverview {
        report_date,
        tabs: summary.statuses,
        overall: summary.overall,
        required_tabs_complete: summary.required_tabs_complete,
        incomplete_required_tabs,
        can_submit: Capability::from_bool(readiness.can_submit),
        blocking_reasons: readiness.blocking_reasons,
    })
}
