//! Identity primitives for scenegate.
//!
//! This crate provides the data types shared by every scenegate layer:
//! who the current user is and what role/permissions they hold.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  scenegate-types : UserId, Role, Permission, User ◄ HERE │
//! │  scenegate-auth  : Constraint, AuthProvider, evaluator   │
//! │  scenegate-ui    : Guard, Button, Badge, identity info   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Types here are pure identity — no permission decisions. Decision
//! logic lives in `scenegate-auth` so that providers and display
//! layers can depend on these types without pulling in policy.
//!
//! All types are immutable snapshots with first-class serde support:
//! the capability provider hands the gating layer a `User` per render
//! pass and nothing in scenegate ever mutates it.
//!
//! # Example
//!
//! ```
//! use scenegate_types::{Permission, Role, User};
//!
//! let user = User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
//!     .with_permissions(["equipment.view"]);
//!
//! assert!(user.has_role(&Role::Operator));
//! assert!(user.has_permission(&Permission::new("equipment.view")));
//! ```

mod id;
mod permission;
mod role;
mod user;

pub use id::UserId;
pub use permission::Permission;
pub use role::Role;
pub use user::User;
