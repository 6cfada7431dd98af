//! User snapshot type.

use crate::{Permission, Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable snapshot of the current user, as supplied by the
/// capability provider.
///
/// This crate never mutates a `User`; guards receive a fresh snapshot
/// on every evaluation and only read it. Builder-style `with_*` methods
/// exist for constructing snapshots in providers and tests.
///
/// # Example
///
/// ```
/// use scenegate_types::{Permission, Role, User};
///
/// let user = User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
///     .with_permissions(["equipment.view", "equipment.control"]);
///
/// assert!(user.has_role(&Role::Operator));
/// assert!(user.has_permission(&Permission::new("equipment.view")));
/// assert!(!user.has_permission(&Permission::new("equipment.delete")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the provider.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// The single role this user holds.
    pub role: Role,
    /// Organizational department, for display only.
    pub department: String,
    /// Last successful login, if the provider tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Fine-grained permission ids this user holds.
    #[serde(default)]
    pub permissions: HashSet<Permission>,
}

impl User {
    /// Creates a snapshot with a fresh id, no permissions, and no
    /// recorded login.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            username: username.into(),
            role,
            department: department.into(),
            last_login: None,
            permissions: HashSet::new(),
        }
    }

    /// Replaces the permission set.
    #[must_use]
    pub fn with_permissions<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Records the last login instant.
    #[must_use]
    pub fn with_last_login(mut self, at: DateTime<Utc>) -> Self {
        self.last_login = Some(at);
        self
    }

    /// Returns `true` if the user holds exactly this role.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.role == *role
    }

    /// Returns `true` if the permission id is in the user's set.
    #[must_use]
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn operator() -> User {
        User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
            .with_permissions(["equipment.view"])
    }

    #[test]
    fn has_role_is_exact() {
        let user = operator();
        assert!(user.has_role(&Role::Operator));
        assert!(!user.has_role(&Role::Admin));
    }

    #[test]
    fn unknown_role_only_matches_itself() {
        let user = User::new("A", "a", Role::Other("auditor".into()), "QA");
        assert!(user.has_role(&Role::Other("auditor".into())));
        assert!(!user.has_role(&Role::Viewer));
    }

    #[test]
    fn has_permission_is_set_membership() {
        let user = operator();
        assert!(user.has_permission(&Permission::new("equipment.view")));
        assert!(!user.has_permission(&Permission::new("equipment.delete")));
    }

    #[test]
    fn new_user_holds_nothing_extra() {
        let user = User::new("A", "a", Role::Viewer, "Ops");
        assert!(user.permissions.is_empty());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn serde_roundtrip_with_optional_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
        let user = operator().with_last_login(at);

        let json = serde_json::to_string(&user).expect("serialize");
        let parsed: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, user);
    }

    #[test]
    fn deserialize_without_optional_fields() {
        let json = r#"{
            "id": "7f1d4f2e-58a3-4a2b-9c40-1d2e3f4a5b6c",
            "name": "A",
            "username": "a",
            "role": "viewer",
            "department": "Ops"
        }"#;
        let user: User = serde_json::from_str(json).expect("deserialize");
        assert!(user.permissions.is_empty());
        assert!(user.last_login.is_none());
        assert_eq!(user.role, Role::Viewer);
    }
}
