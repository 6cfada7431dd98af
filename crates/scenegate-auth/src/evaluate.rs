//! The constraint evaluator.
//!
//! Pure functions deciding, for a user snapshot and a [`Constraint`],
//! whether access is granted. No side effects beyond an audit-level
//! `tracing::debug!` per decision; deterministic and order-independent
//! over the permission list (AND is commutative).

use crate::{Constraint, Decision, DenyReason};
use scenegate_types::User;

/// Decides access for a user snapshot against a constraint.
///
/// Checks in priority order:
///
/// 1. No user → [`DenyReason::NotLoggedIn`]
/// 2. Required role not held → [`DenyReason::RoleInsufficient`]
/// 3. Any listed permission missing → [`DenyReason::PermissionInsufficient`]
///    carrying the first missing id in constraint order
/// 4. Otherwise → [`Decision::Granted`]
///
/// The permission check is conjunctive: **every** listed id must be
/// held. An empty list is vacuously satisfied.
///
/// # Example
///
/// ```
/// use scenegate_auth::{decide, Constraint, DenyReason};
/// use scenegate_types::{Role, User};
///
/// let viewer = User::new("A", "a", Role::Viewer, "Ops");
///
/// let decision = decide(Some(&viewer), &Constraint::role(Role::Admin));
/// assert_eq!(
///     decision.deny_reason(),
///     Some(&DenyReason::RoleInsufficient { required: Role::Admin })
/// );
///
/// assert!(decide(Some(&viewer), &Constraint::none()).is_granted());
/// assert!(!decide(None, &Constraint::none()).is_granted());
/// ```
#[must_use]
pub fn decide(user: Option<&User>, constraint: &Constraint) -> Decision {
    let decision = decide_inner(user, constraint);
    match &decision {
        Decision::Granted => {
            tracing::debug!(constraint = %constraint, "access granted");
        }
        Decision::Denied(reason) => {
            tracing::debug!(constraint = %constraint, reason = %reason, "access denied");
        }
    }
    decision
}

fn decide_inner(user: Option<&User>, constraint: &Constraint) -> Decision {
    let Some(user) = user else {
        return Decision::Denied(DenyReason::NotLoggedIn);
    };

    if let Some(required) = &constraint.role {
        if !user.has_role(required) {
            return Decision::Denied(DenyReason::RoleInsufficient {
                required: required.clone(),
            });
        }
    }

    for permission in &constraint.permissions {
        if !user.has_permission(permission) {
            return Decision::Denied(DenyReason::PermissionInsufficient {
                missing: permission.clone(),
            });
        }
    }

    Decision::Granted
}

/// Boolean projection of [`decide`].
///
/// # Example
///
/// ```
/// use scenegate_auth::{evaluate, Constraint};
/// use scenegate_types::{Role, User};
///
/// let admin = User::new("A", "a", Role::Admin, "IT");
/// assert!(evaluate(Some(&admin), &Constraint::none()));
/// assert!(!evaluate(None, &Constraint::none()));
/// ```
#[must_use]
pub fn evaluate(user: Option<&User>, constraint: &Constraint) -> bool {
    decide(user, constraint).is_granted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegate_types::{Permission, Role};

    fn viewer_with(perms: &[&'static str]) -> User {
        User::new("Dana Ito", "dito", Role::Viewer, "Ops").with_permissions(perms.iter().copied())
    }

    #[test]
    fn absent_user_is_always_denied() {
        assert!(!evaluate(None, &Constraint::none()));
        assert!(!evaluate(None, &Constraint::role(Role::Viewer)));
        assert!(!evaluate(None, &Constraint::permission("view")));
    }

    #[test]
    fn absent_user_reason_wins_over_other_reasons() {
        let c = Constraint::role_and_permissions(Role::Admin, ["edit"]);
        let d = decide(None, &c);
        assert_eq!(d.deny_reason(), Some(&DenyReason::NotLoggedIn));
    }

    #[test]
    fn unrestricted_grants_any_logged_in_user() {
        let user = viewer_with(&[]);
        assert!(evaluate(Some(&user), &Constraint::none()));
    }

    #[test]
    fn admin_passes_empty_constraint() {
        let admin = User::new("A", "a", Role::Admin, "IT");
        assert!(evaluate(Some(&admin), &Constraint::none()));
    }

    #[test]
    fn role_mismatch_denies_with_required_role() {
        let user = viewer_with(&[]);
        let d = decide(Some(&user), &Constraint::role(Role::Admin));
        assert_eq!(
            d.deny_reason(),
            Some(&DenyReason::RoleInsufficient {
                required: Role::Admin
            })
        );
    }

    #[test]
    fn role_match_grants() {
        let user = viewer_with(&[]);
        assert!(evaluate(Some(&user), &Constraint::role(Role::Viewer)));
    }

    #[test]
    fn role_reason_wins_over_permission_reason() {
        let user = viewer_with(&[]);
        let c = Constraint::role_and_permissions(Role::Admin, ["edit"]);
        let d = decide(Some(&user), &c);
        assert_eq!(d.deny_reason().map(DenyReason::kind), Some("role"));
    }

    #[test]
    fn permission_check_is_conjunctive() {
        let user = viewer_with(&["view"]);
        let c = Constraint::permissions(["view", "edit"]);
        let d = decide(Some(&user), &c);
        assert_eq!(
            d.deny_reason(),
            Some(&DenyReason::PermissionInsufficient {
                missing: Permission::new("edit")
            })
        );

        let both = viewer_with(&["view", "edit"]);
        assert!(evaluate(Some(&both), &c));
    }

    #[test]
    fn permission_order_does_not_affect_outcome() {
        let user = viewer_with(&["view", "edit"]);
        let forward = Constraint::permissions(["view", "edit"]);
        let reverse = Constraint::permissions(["edit", "view"]);
        assert_eq!(
            evaluate(Some(&user), &forward),
            evaluate(Some(&user), &reverse)
        );

        let partial = viewer_with(&["view"]);
        assert_eq!(
            evaluate(Some(&partial), &forward),
            evaluate(Some(&partial), &reverse)
        );
        assert!(!evaluate(Some(&partial), &forward));
    }

    #[test]
    fn empty_permission_list_is_vacuously_true() {
        let user = viewer_with(&[]);
        let c = Constraint::permissions(Vec::<Permission>::new());
        assert!(evaluate(Some(&user), &c));
    }

    #[test]
    fn first_missing_permission_is_reported_in_list_order() {
        let user = viewer_with(&[]);
        let c = Constraint::permissions(["alpha", "beta"]);
        let d = decide(Some(&user), &c);
        assert_eq!(
            d.deny_reason(),
            Some(&DenyReason::PermissionInsufficient {
                missing: Permission::new("alpha")
            })
        );
    }

    #[test]
    fn role_and_permissions_both_required() {
        let user = User::new("A", "a", Role::Manager, "Ops").with_permissions(["view"]);
        let c = Constraint::role_and_permissions(Role::Manager, ["view"]);
        assert!(evaluate(Some(&user), &c));

        let missing = Constraint::role_and_permissions(Role::Manager, ["view", "edit"]);
        assert!(!evaluate(Some(&user), &missing));
    }

    #[test]
    fn decide_is_deterministic() {
        let user = viewer_with(&["view"]);
        let c = Constraint::permissions(["view", "edit"]);
        assert_eq!(decide(Some(&user), &c), decide(Some(&user), &c));
    }
}
