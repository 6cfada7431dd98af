//! Higher-order permission wrapping.

use crate::{Node, PermissionGuard};
use scenegate_auth::{AuthProvider, Constraint};

/// Wraps a render function in a permission guard.
///
/// Returns a new render function that forwards its props unchanged to
/// `render` when the constraint passes, and otherwise produces the
/// guard's fallback — this wrapper always shows fallback content on
/// denial, so a wrapped component never silently disappears.
///
/// The decorator-over-components pattern: no trait, no struct, just a
/// function value in and a function value out.
///
/// # Example
///
/// ```
/// use scenegate_auth::{Constraint, SnapshotAuth};
/// use scenegate_types::{Role, User};
/// use scenegate_ui::{with_permission, Node};
///
/// let schedule_panel = |title: &str| Node::text(format!("Schedule: {title}"));
/// let guarded = with_permission(Constraint::role(Role::Manager), schedule_panel);
///
/// let manager = SnapshotAuth::logged_in(User::new("A", "a", Role::Manager, "Ops"));
/// assert_eq!(guarded("Week 12", &manager), Node::text("Schedule: Week 12"));
///
/// let viewer = SnapshotAuth::logged_in(User::new("B", "b", Role::Viewer, "Ops"));
/// let denied = guarded("Week 12", &viewer);
/// assert!(matches!(denied, Node::Text(msg) if msg.contains("role")));
/// ```
pub fn with_permission<P, F>(
    constraint: Constraint,
    render: F,
) -> impl Fn(P, &dyn AuthProvider) -> Node
where
    F: Fn(P) -> Node,
{
    let guard = PermissionGuard::new(constraint).show_fallback(true);
    move |props: P, auth: &dyn AuthProvider| guard.resolve_with(auth, || render(props))
}
