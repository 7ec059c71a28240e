// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission readiness evaluation.
//!
//! This module derives whether a daily report may be submitted from its
//! completion summary, with a human-readable reason for each blocker.
//!
//! Readiness is **computed**, not stored. It's a pure function of the
//! completion summary it is handed.

use crate::completion::CompletionSummary;
use serde::{Deserialize, Serialize};

/// Derived submit-gating state for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReadiness {
    /// True iff every required tab is complete.
    pub can_submit: bool,
    /// One reason per incomplete required tab, in tab order.
    pub blocking_reasons: Vec<String>,
}

/// Evaluates submission readiness for a report.
///
/// # Arguments
///
/// * `summary` - The completion summary for the report's visible tabs
///
/// # Returns
///
/// A `SubmissionReadiness` whose `can_submit` mirrors
/// `required_tabs_complete` and whose reasons name each blocking tab.
#[must_use]
pub fn evaluate_submission_readiness(summary: &CompletionSummary) -> SubmissionReadiness {
    let blocking_reasons: Vec<String> = summary
        .incomplete_required
        .iter()
        .map(|status| {
            format!(
                "Required tab '{}' is incomplete ({} of {} items)",
                status.name, status.completed_items, status.total_items
            )
        })
        .collect();

    SubmissionReadiness {
        can_submit: summary.required_tabs_complete,
        blocking_reasons,
    }
}
