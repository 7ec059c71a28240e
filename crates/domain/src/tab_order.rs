// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tab ordering.
//!
//! This module produces the canonical presentation order for a tab
//! catalog.
//!
//! ## Ordering Rules (Authoritative)
//!
//! Active tabs are ordered by:
//! 1. `display_order` (lowest first; values need not be contiguous)
//! 2. Tie Breaker: `tab_id` (lexicographic)
//!
//! The resulting order is total and stable: two catalogs with the same
//! tabs always order the same way, regardless of input order.

use crate::types::Tab;
use std::cmp::Ordering;

/// Returns the active tabs in canonical presentation order.
///
/// Inactive tabs are dropped. The remainder is sorted by
/// `display_order`, with ties broken by `tab_id` so the order stays
/// total even when administrators assign duplicate positions.
///
/// # Arguments
///
/// * `tabs` - The tab catalog, in any order
#[must_use]
pub fn order_active_tabs(tabs: &[Tab]) -> Vec<Tab> {
    let mut active: Vec<Tab> = tabs.iter().filter(|t| t.is_active).cloned().collect();
    active.sort_by(compare_tabs);
    active
}

fn compare_tabs(a: &Tab, b: &Tab) -> Ordering {
    a.display_order
        .cmp(&b.display_order)
        .then_with(|| a.tab_id.cmp(&b.tab_id))
}
