//! Conditional rendering behind a constraint.

use crate::Node;
use scenegate_auth::{AuthProvider, Constraint};

/// Renders children only when the current user passes a constraint.
///
/// On denial the guard renders nothing by default. With
/// [`show_fallback`](Self::show_fallback) it renders the supplied
/// [`fallback`](Self::fallback) instead, or — when none was supplied —
/// a default message specific to the denial reason (not logged in,
/// role insufficient, permission insufficient, checked in that
/// priority order).
///
/// # Example
///
/// ```
/// use scenegate_auth::{Constraint, SnapshotAuth};
/// use scenegate_types::{Role, User};
/// use scenegate_ui::{Node, PermissionGuard};
///
/// let viewer = SnapshotAuth::logged_in(User::new("A", "a", Role::Viewer, "Ops"));
/// let guard = PermissionGuard::new(Constraint::role(Role::Admin));
///
/// // Denied and not showing fallback: renders nothing.
/// assert!(guard.resolve(&viewer, Node::text("secret")).is_empty());
///
/// // Denied and showing fallback: default role-insufficient message.
/// let shown = guard.show_fallback(true).resolve(&viewer, Node::text("secret"));
/// assert!(matches!(shown, Node::Text(msg) if msg.contains("role")));
/// ```
#[derive(Debug, Clone)]
pub struct PermissionGuard {
    constraint: Constraint,
    fallback: Option<Node>,
    show_fallback: bool,
}

impl PermissionGuard {
    /// Guard with no fallback shown on denial.
    #[must_use]
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            fallback: None,
            show_fallback: false,
        }
    }

    /// Supplies custom fallback content (only rendered when
    /// [`show_fallback`](Self::show_fallback) is enabled).
    #[must_use]
    pub fn fallback(mut self, fallback: impl Into<Node>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Whether denial renders fallback content instead of nothing.
    #[must_use]
    pub fn show_fallback(mut self, show: bool) -> Self {
        self.show_fallback = show;
        self
    }

    /// The constraint this guard enforces.
    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Resolves already-built children against the current user.
    #[must_use]
    pub fn resolve(&self, auth: &dyn AuthProvider, children: Node) -> Node {
        self.resolve_with(auth, || children)
    }

    /// Resolves children built lazily, so denied renders never pay for
    /// building content that will be discarded.
    pub fn resolve_with<F>(&self, auth: &dyn AuthProvider, children: F) -> Node
    where
        F: FnOnce() -> Node,
    {
        let decision = auth.check(&self.constraint);
        match decision.deny_reason() {
            None => children(),
            Some(_) if !self.show_fallback => Node::Empty,
            Some(reason) => self
                .fallback
                .clone()
                .unwrap_or_else(|| Node::text(reason.default_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegate_auth::SnapshotAuth;
    use scenegate_types::{Role, User};

    fn viewer() -> SnapshotAuth {
        SnapshotAuth::logged_in(
            User::new("Dana Ito", "dito", Role::Viewer, "Ops").with_permissions(["view"]),
        )
    }

    #[test]
    fn granted_renders_children_unchanged() {
        let guard = PermissionGuard::new(Constraint::permission("view"));
        let out = guard.resolve(&viewer(), Node::text("content"));
        assert_eq!(out, Node::text("content"));
    }

    #[test]
    fn denied_without_fallback_renders_nothing() {
        let guard = PermissionGuard::new(Constraint::role(Role::Admin));
        let out = guard.resolve(&viewer(), Node::text("content"));
        assert!(out.is_empty());
    }

    #[test]
    fn denied_with_custom_fallback_renders_it() {
        let guard = PermissionGuard::new(Constraint::role(Role::Admin))
            .show_fallback(true)
            .fallback(Node::text("ask an admin"));
        let out = guard.resolve(&viewer(), Node::text("content"));
        assert_eq!(out, Node::text("ask an admin"));
    }

    #[test]
    fn custom_fallback_without_show_fallback_still_hides() {
        let guard =
            PermissionGuard::new(Constraint::role(Role::Admin)).fallback(Node::text("nope"));
        assert!(guard.resolve(&viewer(), Node::text("content")).is_empty());
    }

    #[test]
    fn default_message_not_logged_in() {
        let guard = PermissionGuard::new(Constraint::none()).show_fallback(true);
        let out = guard.resolve(&SnapshotAuth::logged_out(), Node::text("content"));
        assert!(matches!(out, Node::Text(msg) if msg.contains("log in")));
    }

    #[test]
    fn default_message_role_insufficient() {
        let guard = PermissionGuard::new(Constraint::role(Role::Admin)).show_fallback(true);
        let out = guard.resolve(&viewer(), Node::text("content"));
        assert!(matches!(out, Node::Text(msg) if msg.contains("role") && msg.contains("admin")));
    }

    #[test]
    fn default_message_permission_insufficient() {
        let guard = PermissionGuard::new(Constraint::permission("edit")).show_fallback(true);
        let out = guard.resolve(&viewer(), Node::text("content"));
        assert!(matches!(out, Node::Text(msg) if msg.contains("permission") && msg.contains("edit")));
    }

    #[test]
    fn not_logged_in_takes_priority_over_role_and_permission() {
        let guard =
            PermissionGuard::new(Constraint::role_and_permissions(Role::Admin, ["edit"]))
                .show_fallback(true);
        let out = guard.resolve(&SnapshotAuth::logged_out(), Node::text("content"));
        assert!(matches!(out, Node::Text(msg) if msg.contains("log in")));
    }

    #[test]
    fn lazy_children_not_built_when_denied() {
        let guard = PermissionGuard::new(Constraint::role(Role::Admin));
        let mut built = false;
        let out = guard.resolve_with(&viewer(), || {
            built = true;
            Node::text("content")
        });
        assert!(out.is_empty());
        assert!(!built);
    }
}
