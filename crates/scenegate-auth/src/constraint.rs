//! Declarative access constraints.

use scenegate_types::{Permission, Role};
use serde::{Deserialize, Serialize};

/// The declarative `(role, permissions)` pair attached to a guarded
/// element.
///
/// Both halves are optional and combine with AND:
///
/// - `role`: the user must hold exactly this role.
/// - `permissions`: the user must hold **every** listed id (logical
///   AND — there is intentionally no any-of mode). An empty list is
///   the same as no permission constraint.
///
/// A constraint with neither half set is unrestricted: any logged-in
/// user passes.
///
/// # Example
///
/// ```
/// use scenegate_auth::Constraint;
/// use scenegate_types::Role;
///
/// assert!(Constraint::none().is_unrestricted());
/// assert!(!Constraint::role(Role::Admin).is_unrestricted());
///
/// let c = Constraint::permissions(["equipment.view", "equipment.edit"]);
/// assert_eq!(c.permissions.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraint {
    /// Required role, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Required permission ids; all must be held.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl Constraint {
    /// No restriction: visible/enabled for any logged-in user.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Requires exactly this role.
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            permissions: Vec::new(),
        }
    }

    /// Requires a single permission.
    #[must_use]
    pub fn permission(permission: impl Into<Permission>) -> Self {
        Self {
            role: None,
            permissions: vec![permission.into()],
        }
    }

    /// Requires every listed permission.
    #[must_use]
    pub fn permissions<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            role: None,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Requires a role and every listed permission.
    #[must_use]
    pub fn role_and_permissions<I, P>(role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            role: Some(role),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if neither a role nor any permission is required.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.role.is_none() && self.permissions.is_empty()
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unrestricted() {
            return write!(f, "(unrestricted)");
        }
        let mut parts = Vec::new();
        if let Some(role) = &self.role {
            parts.push(format!("role={role}"));
        }
        if !self.permissions.is_empty() {
            let ids: Vec<&str> = self.permissions.iter().map(Permission::as_str).collect();
            parts.push(format!("permissions={}", ids.join("+")));
        }
        write!(f, "{}", parts.join(" "))
    }
}
