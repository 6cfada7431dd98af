//! Constraint evaluation for scenegate.
//!
//! This crate is the decision layer: it turns a declarative
//! [`Constraint`] and the current [`User`](scenegate_types::User)
//! snapshot into a [`Decision`].
//!
//! # Access Model
//!
//! ```text
//! Granted = LoggedIn(WHO) ∧ Role(COARSE) ∧ Permissions(FINE, all-of)
//! ```
//!
//! | Check | Source | Denial reason |
//! |-------|--------|---------------|
//! | Logged in | `AuthProvider::current_user` | `NotLoggedIn` |
//! | Role | `User::has_role` (exact match) | `RoleInsufficient` |
//! | Permissions | `User::has_permission` (every listed id) | `PermissionInsufficient` |
//!
//! Checks run in that order and the first failing one names the
//! denial, so fallback content can be specific. Denial is an ordinary
//! outcome, never an error.
//!
//! # Crate Architecture
//!
//! ```text
//! scenegate-types  (UserId, Role, Permission, User)
//!        ↑
//! scenegate-auth   (Constraint, evaluator, AuthProvider)  ◄── THIS CRATE
//!        ↑
//! scenegate-ui     (PermissionGuard, PermissionButton, badges)
//! ```
//!
//! # Design Principles
//!
//! - **Pure evaluation** — `decide`/`evaluate` are functions of their
//!   two inputs; the only side effect is an audit `tracing::debug!`.
//! - **Trait seam at the provider** — guards depend on [`AuthProvider`],
//!   never on a concrete auth backend. [`SnapshotAuth`] is the bundled
//!   snapshot-holding implementation.
//! - **All-of permissions** — the permission list is conjunctive by
//!   design; there is no any-of mode.
//!
//! # Example
//!
//! ```
//! use scenegate_auth::{AuthProvider, Constraint, SnapshotAuth};
//! use scenegate_types::{Role, User};
//!
//! let auth = SnapshotAuth::logged_in(
//!     User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
//!         .with_permissions(["equipment.view"]),
//! );
//!
//! assert!(auth.check(&Constraint::permission("equipment.view")).is_granted());
//! assert!(!auth.check(&Constraint::role(Role::Admin)).is_granted());
//! ```

mod constraint;
mod decision;
mod evaluate;
mod provider;

pub use constraint::Constraint;
pub use decision::{Decision, DenyReason};
pub use evaluate::{decide, evaluate};
pub use provider::{AuthProvider, SnapshotAuth};
