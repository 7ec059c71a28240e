// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tab completion evaluation.
//!
//! This module derives per-tab completion status and aggregate report
//! progress from a tab list, a draft payload map, and a template
//! snapshot.
//!
//! Completion is **computed**, not stored. It's a pure function of its
//! inputs: identical inputs always produce identical outputs, malformed
//! input falls through default branches, and nothing here can fail.

use crate::types::{FieldValue, FormTemplate, Tab, TabFormData, TabId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tunable knobs for completion evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Item count assumed for a free-form tab whose checklist has not
    /// been touched yet. The stock facility checklist ships with five
    /// items, so an un-submitted tab reads as "0 of 5".
    pub empty_checklist_items: usize,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            empty_checklist_items: 5,
        }
    }
}

/// Derived completion state for a single tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCompletionStatus {
    /// The tab identifier.
    pub tab_id: TabId,
    /// The tab display name.
    pub name: String,
    /// Whether the tab is required, copied verbatim from the tab.
    pub is_required: bool,
    /// Whether the tab counts as complete.
    pub is_complete: bool,
    /// Number of items the user has completed.
    pub completed_items: usize,
    /// Number of items the tab expects.
    pub total_items: usize,
    /// Integer percentage in `[0, 100]`, rounded half away from zero.
    pub percent_complete: u8,
}

/// Aggregate progress across the evaluated tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallProgress {
    /// Number of tabs whose status is complete.
    pub completed: usize,
    /// Number of tabs evaluated.
    pub total: usize,
    /// Integer percentage in `[0, 100]`, `0` when no tabs were evaluated.
    pub percent: u8,
}

/// Full result of evaluating a report's tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// One status per input tab, in input order.
    pub statuses: Vec<TabCompletionStatus>,
    /// Aggregate progress.
    pub overall: OverallProgress,
    /// True iff every required tab is complete. Vacuously true when no
    /// tab is required.
    pub required_tabs_complete: bool,
    /// Required-and-incomplete statuses, in input order.
    pub incomplete_required: Vec<TabCompletionStatus>,
}

/// Integer percentage with half-away-from-zero rounding, `0` when
/// `total` is zero.
fn percent_of(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded: usize = (200 * completed + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Evaluates completion for a single tab.
///
/// The tab's `form_template_id` is resolved against `templates`; a match
/// selects template-backed evaluation, anything else selects the
/// free-form checklist path. A draft payload whose shape disagrees with
/// that resolution is treated as empty.
///
/// # Arguments
///
/// * `tab` - The tab to evaluate
/// * `data` - The draft payload for this tab, if any
/// * `templates` - The current template snapshot
/// * `options` - Evaluation knobs
///
/// # Returns
///
/// The derived `TabCompletionStatus` for this tab.
#[must_use]
pub fn evaluate_tab_completion(
    tab: &Tab,
    data: Option<&TabFormData>,
    templates: &[FormTemplate],
    options: &CompletionOptions,
) -> TabCompletionStatus {
    let template: Option<&FormTemplate> = tab
        .form_template_id
        .as_ref()
        .and_then(|id| templates.iter().find(|t| &t.template_id == id));

    let (is_complete, completed_items, total_items, percent_complete) = match template {
        Some(template) => evaluate_template_tab(template, data),
        None => evaluate_checklist_tab(data, options),
    };

    TabCompletionStatus {
        tab_id: tab.tab_id.clone(),
        name: tab.name.clone(),
        is_required: tab.is_required,
        is_complete,
        completed_items,
        total_items,
        percent_complete,
    }
}

/// Template-backed path: counts filled fields over the whole field list,
/// with completeness decided by the required subset when one exists.
fn evaluate_template_tab(
    template: &FormTemplate,
    data: Option<&TabFormData>,
) -> (bool, usize, usize, u8) {
    let empty: HashMap<String, FieldValue> = HashMap::new();
    let values: &HashMap<String, FieldValue> = match data {
        Some(TabFormData::TemplateFields { values }) => values,
        _ => &empty,
    };

    let total_items: usize = template.fields.len();
    let completed_items: usize = template
        .fields
        .iter()
        .filter(|field| field.is_filled(values.get(&field.field_name)))
        .count();

    let required_fields = template.required_fields();
    let is_complete: bool = if required_fields.is_empty() {
        // No required fields: any filled field counts as progress enough
        completed_items > 0
    } else {
        required_fields
            .iter()
            .all(|field| field.is_filled(values.get(&field.field_name)))
    };

    let percent_complete: u8 = percent_of(completed_items, total_items);
    (is_complete, completed_items, total_items, percent_complete)
}

/// Free-form path: checklist ticks plus notes presence.
fn evaluate_checklist_tab(
    data: Option<&TabFormData>,
    options: &CompletionOptions,
) -> (bool, usize, usize, u8) {
    let (items, notes): (Option<&HashMap<String, bool>>, &str) = match data {
        Some(TabFormData::Checklist { items, notes }) => (Some(items), notes.as_str()),
        _ => (None, ""),
    };

    let item_count: usize = items.map_or(0, HashMap::len);
    let completed_items: usize = items.map_or(0, |m| m.values().filter(|checked| **checked).count());
    let has_notes: bool = !notes.trim().is_empty();

    // An untouched checklist still renders its stock item count
    let total_items: usize = if item_count == 0 {
        options.empty_checklist_items
    } else {
        item_count
    };

    let is_complete: bool = completed_items > 0 || has_notes;

    let percent_complete: u8 = if item_count > 0 {
        percent_of(completed_items, item_count)
    } else if has_notes {
        100
    } else {
        0
    };

    (is_complete, completed_items, total_items, percent_complete)
}

/// Evaluates completion for a whole report.
///
/// # Arguments
///
/// * `tabs` - The tabs to evaluate, already visibility-filtered and
///   ordered by the caller
/// * `drafts` - Draft payloads keyed by tab identifier; missing entries
///   are treated as empty
/// * `templates` - The current template snapshot
/// * `options` - Evaluation knobs
///
/// # Returns
///
/// A `CompletionSummary` with one status per input tab, in input order,
/// plus the aggregate progress and required-tab rollups.
#[must_use]
pub fn evaluate_report_completion(
    tabs: &[Tab],
    drafts: &HashMap<TabId, TabFormData>,
    templates: &[FormTemplate],
    options: &CompletionOptions,
) -> CompletionSummary {
    let statuses: Vec<TabCompletionStatus> = tabs
        .iter()
        .map(|tab| evaluate_tab_completion(tab, drafts.get(&tab.tab_id), templates, options))
        .collect();

    let completed: usize = statuses.iter().filter(|s| s.is_complete).count();
    let total: usize = statuses.len();
    let overall = OverallProgress {
        completed,
        total,
        percent: percent_of(completed, total),
    };

    let incomplete_required: Vec<TabCompletionStatus> = statuses
        .iter()
        .filter(|s| s.is_required && !s.is_complete)
        .cloned()
        .collect();
    let required_tabs_complete: bool = incomplete_required.is_empty();

    CompletionSummary {
        statuses,
        overall,
        required_tabs_complete,
        incomplete_required,
    }
}
