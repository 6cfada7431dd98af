//! Permission-gated UI primitives for scenegate.
//!
//! This crate is the presentation layer: it consumes decisions from
//! `scenegate-auth` and turns them into render output over a small
//! host-agnostic [`Node`] tree.
//!
//! # Components
//!
//! | Component | Denied behavior |
//! |-----------|-----------------|
//! | [`PermissionGuard`] | Renders nothing, or fallback content on request |
//! | [`PermissionButton`] | Renders the child disabled with an affordance, or hides it |
//! | [`RoleBadge`] | n/a — pure display of the role |
//! | [`PermissionInfo`] | n/a — pure display of the identity snapshot |
//! | [`with_permission`] | Always renders fallback content |
//!
//! # Crate Architecture
//!
//! ```text
//! scenegate-types  (UserId, Role, Permission, User)
//!        ↑
//! scenegate-auth   (Constraint, evaluator, AuthProvider)
//!        ↑
//! scenegate-ui     (guards, badges, identity panel)  ◄── THIS CRATE
//! ```
//!
//! # Design Principles
//!
//! - **Host-agnostic output** — components return [`Node`] values; the
//!   embedding front-end maps them onto its own DOM or widget layer.
//! - **One merge function** — every prop rewrite goes through
//!   [`Props::merged_over`] so precedence is in one documented place.
//! - **Fail fast on malformed input** — contract violations (wrong
//!   child arity) are [`ElementError`]s, not silent misrenders. Denial
//!   itself is never an error.
//!
//! # Example
//!
//! ```
//! use scenegate_auth::{Constraint, SnapshotAuth};
//! use scenegate_types::{Role, User};
//! use scenegate_ui::{Element, Node, PermissionButton, PermissionGuard};
//!
//! let auth = SnapshotAuth::logged_in(
//!     User::new("Dana Ito", "dito", Role::Operator, "Maintenance")
//!         .with_permissions(["equipment.view"]),
//! );
//!
//! // Section visible only with the view permission.
//! let section = PermissionGuard::new(Constraint::permission("equipment.view"))
//!     .resolve(&auth, Node::text("pump telemetry"));
//! assert_eq!(section, Node::text("pump telemetry"));
//!
//! // Control button disabled without the control permission.
//! let button = PermissionButton::new(Constraint::permission("equipment.control"))
//!     .resolve(&auth, Element::new("button").child(Node::text("Start")));
//! assert!(button.as_element().expect("rendered").props.disabled);
//! ```

mod badge;
mod button;
mod element;
mod guard;
mod info;
mod theme;
mod wrap;

pub use badge::{BadgeStyle, RoleBadge};
pub use button::PermissionButton;
pub use element::{Element, ElementError, Node, Props};
pub use guard::PermissionGuard;
pub use info::{IdentitySummary, PermissionInfo};
pub use theme::{BadgeColors, Theme};
pub use wrap::with_permission;
