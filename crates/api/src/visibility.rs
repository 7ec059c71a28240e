// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-gated tab visibility.
//!
//! Visibility is advisory UI gating, not a security boundary: it decides
//! which report sections a user is shown, while data access is enforced
//! upstream.
//!
//! The filter applies only the role predicate. Callers hand it tabs that
//! are already active-filtered and ordered; it never re-sorts or
//! re-filters on activity.

use crate::roles::UserRoleContext;
use rinkops_domain::Tab;

/// Returns whether a single tab is visible to the given user.
///
/// Admin and manager application roles bypass role restrictions
/// entirely. For everyone else, a tab with no restrictions is visible to
/// all, and a restricted tab is visible only when the user holds at
/// least one of the restricted scheduling roles.
///
/// # Arguments
///
/// * `tab` - The tab to check
/// * `context` - The user's resolved role assignments
#[must_use]
pub fn is_tab_visible(tab: &Tab, context: &UserRoleContext) -> bool {
    if context.application_role.bypasses_role_restrictions() {
        return true;
    }

    if tab.role_restrictions.is_empty() {
        return true;
    }

    context.holds_any_role(&tab.role_restrictions)
}

/// Returns the subset of tabs visible to the given user, preserving
/// input order.
///
/// A user with an empty scheduling-role set (no resolvable
/// scheduling-staff record) sees only unrestricted tabs.
///
/// # Arguments
///
/// * `tabs` - The tabs to filter, already active-filtered and ordered
/// * `context` - The user's resolved role assignments
#[must_use]
pub fn filter_visible_tabs(tabs: &[Tab], context: &UserRoleContext) -> Vec<Tab> {
    // Admins and managers get the input back untouched
    if context.application_role.bypasses_role_restrictions() {
        return tabs.to_vec();
    }

    tabs.iter()
        .filter(|tab| {
            let visible: bool = is_tab_visible(tab, context);
            if !visible {
                tracing::debug!(
                    "Tab '{}' hidden from {} user: no scheduling role overlap",
                    tab.tab_id.value(),
                    context.application_role.as_str()
                );
            }
            visible
        })
        .cloned()
        .collect()
}
