// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role context for visibility decisions.

use rinkops_domain::RoleId;
use std::collections::HashSet;

/// Application-level roles for authorization.
///
/// The application role is the coarse privilege level of an account and
/// is distinct from scheduling roles, which are roster assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationRole {
    /// Admin role: facility administrators with full configuration
    /// authority.
    ///
    /// Admins may manage the tab catalog, form templates, accounts, and
    /// see every tab regardless of role restriction.
    Admin,
    /// Manager role: shift managers overseeing daily operations.
    ///
    /// Managers see every tab regardless of role restriction, but do
    /// not manage accounts.
    Manager,
    /// Staff role: everyone else. Staff see only tabs that are
    /// unrestricted or restricted to a scheduling role they hold.
    Staff,
}

impl ApplicationRole {
    /// Parses an application role from its string representation.
    ///
    /// Matching is case-insensitive. Anything that is not "admin" or
    /// "manager" maps to `Staff`, so an unknown role string can never
    /// widen visibility.
    #[must_use]
    pub fn from_role_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else if s.eq_ignore_ascii_case("manager") {
            Self::Manager
        } else {
            Self::Staff
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }

    /// Returns whether this role sees all tabs regardless of role
    /// restrictions.
    #[must_use]
    pub const fn bypasses_role_restrictions(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

/// The resolved role assignments of the current user.
///
/// This is an explicit input to the visibility filter rather than
/// ambient state, so visibility decisions are deterministic functions of
/// their arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleContext {
    /// The user's application-level role.
    pub application_role: ApplicationRole,
    /// The scheduling roles assigned to the user. Empty when the user
    /// has no resolvable scheduling-staff record.
    pub scheduling_roles: HashSet<RoleId>,
}

impl UserRoleContext {
    /// Creates a new `UserRoleContext`.
    ///
    /// # Arguments
    ///
    /// * `application_role` - The application-level role
    /// * `scheduling_roles` - The scheduling roles assigned to the user
    #[must_use]
    pub fn new<I>(application_role: ApplicationRole, scheduling_roles: I) -> Self
    where
        I: IntoIterator<Item = RoleId>,
    {
        Self {
            application_role,
            scheduling_roles: scheduling_roles.into_iter().collect(),
        }
    }

    /// Creates a context for a user with no scheduling-staff record.
    ///
    /// Such a user sees only unrestricted tabs unless their application
    /// role bypasses restrictions.
    #[must_use]
    pub fn without_scheduling_roles(application_role: ApplicationRole) -> Self {
        Self {
            application_role,
            scheduling_roles: HashSet::new(),
        }
    }

    /// Returns whether the user holds any of the given scheduling roles.
    ///
    /// # Arguments
    ///
    /// * `restrictions` - The roles to intersect with
    #[must_use]
    pub fn holds_any_role(&self, restrictions: &[RoleId]) -> bool {
        restrictions
            .iter()
            .any(|role| self.scheduling_roles.contains(role))
    }
}
