//! The capability-provider seam.
//!
//! [`AuthProvider`] abstracts the external authentication service.
//! Guards never talk to an auth backend directly — they ask a provider
//! for the current snapshot on every evaluation, so this layer adds no
//! caching and no staleness window of its own.

use crate::{decide, Constraint, Decision};
use scenegate_types::{Permission, Role, User};

/// Supplies the current identity to the gating layer.
///
/// Implement this for whatever actually holds auth state (a session
/// store, a token cache, a test fixture). Only
/// [`current_user`](Self::current_user) is required; the query methods
/// have provided implementations that consult a fresh snapshot, and
/// providers with a cheaper native check (say, a token claim lookup)
/// can override them.
///
/// # Thread Safety
///
/// Providers must be `Send + Sync` so guards can be shared across
/// threads. Nothing in this trait blocks or suspends.
///
/// # Example
///
/// ```
/// use scenegate_auth::{AuthProvider, Constraint, SnapshotAuth};
/// use scenegate_types::{Role, User};
///
/// let auth = SnapshotAuth::logged_in(User::new("A", "a", Role::Viewer, "Ops"));
/// assert!(auth.has_role(&Role::Viewer));
/// assert!(auth.check(&Constraint::none()).is_granted());
///
/// let nobody = SnapshotAuth::logged_out();
/// assert!(!nobody.check(&Constraint::none()).is_granted());
/// ```
pub trait AuthProvider: Send + Sync {
    /// Returns a snapshot of the current user, or `None` when logged out.
    ///
    /// Called fresh on every evaluation; implementations decide what
    /// "current" means (session lookup, token decode, fixture).
    fn current_user(&self) -> Option<User>;

    /// Returns `true` if the current user holds exactly this role.
    fn has_role(&self, role: &Role) -> bool {
        self.current_user()
            .is_some_and(|user| user.has_role(role))
    }

    /// Returns `true` if the current user holds this permission.
    fn has_permission(&self, permission: &Permission) -> bool {
        self.current_user()
            .is_some_and(|user| user.has_permission(permission))
    }

    /// Evaluates a constraint against the current snapshot.
    fn check(&self, constraint: &Constraint) -> Decision {
        decide(self.current_user().as_ref(), constraint)
    }
}

/// A provider over a fixed snapshot.
///
/// The simplest useful implementation: holds `Option<User>` and hands
/// out clones. Suits single-page front-ends where the snapshot is
/// replaced wholesale on login/logout, and test fixtures.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAuth {
    user: Option<User>,
}

impl SnapshotAuth {
    /// Provider with a logged-in user.
    #[must_use]
    pub fn logged_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Provider with nobody logged in.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { user: None }
    }
}

impl AuthProvider for SnapshotAuth {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DenyReason;

    fn operator() -> User {
        User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
            .with_permissions(["equipment.view"])
    }

    #[test]
    fn logged_out_has_no_user() {
        let auth = SnapshotAuth::logged_out();
        assert!(auth.current_user().is_none());
        assert!(!auth.has_role(&Role::Viewer));
        assert!(!auth.has_permission(&Permission::new("equipment.view")));
    }

    #[test]
    fn logged_in_answers_queries() {
        let auth = SnapshotAuth::logged_in(operator());
        assert!(auth.has_role(&Role::Operator));
        assert!(!auth.has_role(&Role::Admin));
        assert!(auth.has_permission(&Permission::new("equipment.view")));
        assert!(!auth.has_permission(&Permission::new("equipment.edit")));
    }

    #[test]
    fn check_delegates_to_evaluator() {
        let auth = SnapshotAuth::logged_in(operator());
        assert!(auth.check(&Constraint::role(Role::Operator)).is_granted());

        let denied = auth.check(&Constraint::permission("equipment.edit"));
        assert_eq!(
            denied.deny_reason(),
            Some(&DenyReason::PermissionInsufficient {
                missing: Permission::new("equipment.edit")
            })
        );
    }

    #[test]
    fn trait_object_works() {
        let auth: Box<dyn AuthProvider> = Box::new(SnapshotAuth::logged_in(operator()));
        assert!(auth.check(&Constraint::none()).is_granted());
    }

    #[test]
    fn overriding_queries_is_allowed() {
        // A provider with a native claim check that never materializes
        // a snapshot for has_permission.
        struct ClaimAuth;

        impl AuthProvider for ClaimAuth {
            fn current_user(&self) -> Option<User> {
                Some(User::new("A", "a", Role::Viewer, "Ops"))
            }

            fn has_permission(&self, permission: &Permission) -> bool {
                permission.as_str() == "from-claims"
            }
        }

        let auth = ClaimAuth;
        assert!(auth.has_permission(&Permission::new("from-claims")));
        // check() still goes through the snapshot, which holds nothing.
        assert!(!auth
            .check(&Constraint::permission("from-claims"))
            .is_granted());
    }
}
