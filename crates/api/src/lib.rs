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
    clippy::all
)]

mod error;
mod overview;
mod roles;
mod view;
mod visibility;

#[cfg(test)]
mod tests;

pub use error::OverviewError;
pub use overview::build_report_overview;
pub use roles::{ApplicationRole, UserRoleContext};
pub use view::{Capability, ReportOverview};
pub use visibility::{filter_visible_tabs, is_tab_visible};
