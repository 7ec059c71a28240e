// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View models consumed read-only by the presentation layer.

use rinkops_domain::{OverallProgress, TabCompletionStatus, TabId};
use serde::{Deserialize, Serialize};
use time::Date;

/// Whether an action is permitted.
///
/// Capabilities expose what the UI should offer without leaking domain
/// internals. They are advisory only and do not replace backend checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// The assembled view of one daily report for one user.
///
/// Everything in here is derived; nothing is persisted. Completion
/// covers only the tabs visible to the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOverview {
    /// The date the report covers.
    pub report_date: Date,
    /// Completion status for each visible tab, in presentation order.
    pub tabs: Vec<TabCompletionStatus>,
    /// Aggregate progress across the visible tabs.
    pub overall: OverallProgress,
    /// True iff every visible required tab is complete.
    pub required_tabs_complete: bool,
    /// Identifiers of required tabs still blocking submission.
    pub incomplete_required_tabs: Vec<TabId>,
    /// Whether the submit action should be offered.
    pub can_submit: Capability,
    /// One human-readable reason per blocking tab.
    pub blocking_reasons: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_from_bool() {
        assert_eq!(Capability::from_bool(true), Capability::Allowed);
        assert_eq!(Capability::from_bool(false), Capability::Denied);
        assert!(Capability::Allowed.is_allowed());
        assert!(!Capability::Denied.is_allowed());
    }

    #[test]
    fn test_capability_serializes_as_bool() {
        let json = serde_json::to_string(&Capability::Allowed).unwrap();
        assert_eq!(json, "true");

        let json = serde_json::to_string(&Capability::Denied).unwrap();
        assert_eq!(json, "false");
    }

    #[test]
    fn test_capability_deserializes_from_bool() {
        let capability: Capability = serde_json::from_str("true").unwrap();
        assert_eq!(capability, Capability::Allowed);

        let capability: Capability = serde_json::from_str("false").unwrap();
        assert_eq!(capability, Capability::Denied);
    }
}
