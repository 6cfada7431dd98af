//! Permission-aware actionable element wrapper.

use crate::{Element, ElementError, Node, Props};
use scenegate_auth::{AuthProvider, Constraint};

/// Affordance style merged over a denied button.
fn denied_affordance() -> Props {
    let mut props = Props::default();
    props.style.insert("opacity".to_string(), "0.5".to_string());
    props
        .style
        .insert("cursor".to_string(), "not-allowed".to_string());
    props
}

/// Wraps exactly one actionable element, reflecting permission state
/// through the disabled flag and affordance styling instead of hiding
/// it — unless [`show_disabled`](Self::show_disabled) is turned off, in
/// which case denial hides the element entirely.
///
/// On denial the child's props are rewritten through one explicit
/// shallow merge ([`Props::merged_over`]): the computed overlay wins
/// for `disabled`, the tooltip, and the two affordance style keys
/// (`opacity`, `cursor`); the caller's props win everywhere else.
///
/// # Example
///
/// ```
/// use scenegate_auth::{Constraint, SnapshotAuth};
/// use scenegate_types::{Role, User};
/// use scenegate_ui::{Element, Node, PermissionButton};
///
/// let viewer = SnapshotAuth::logged_in(User::new("A", "a", Role::Viewer, "Ops"));
/// let button = PermissionButton::new(Constraint::permission("equipment.control"));
///
/// let out = button.resolve(&viewer, Element::new("button").title("Start pump"));
/// let el = out.as_element().expect("still rendered");
/// assert!(el.props.disabled);
/// assert_ne!(el.props.title.as_deref(), Some("Start pump"));
/// ```
#[derive(Debug, Clone)]
pub struct PermissionButton {
    constraint: Constraint,
    disabled: bool,
    show_disabled: bool,
    disabled_message: Option<String>,
}

impl PermissionButton {
    /// Button gate for a constraint; shows the disabled state by
    /// default rather than hiding the element.
    #[must_use]
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            disabled: false,
            show_disabled: true,
            disabled_message: None,
        }
    }

    /// Caller-level disabled flag, ORed with the permission outcome.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether a denied element is rendered disabled (`true`, default)
    /// or hidden entirely (`false`).
    #[must_use]
    pub fn show_disabled(mut self, show: bool) -> Self {
        self.show_disabled = show;
        self
    }

    /// Tooltip shown on the element when denied. Defaults to the
    /// denial reason's message.
    #[must_use]
    pub fn disabled_message(mut self, message: impl Into<String>) -> Self {
        self.disabled_message = Some(message.into());
        self
    }

    /// Resolves the single child element against the current user.
    #[must_use]
    pub fn resolve(&self, auth: &dyn AuthProvider, child: Element) -> Node {
        let decision = auth.check(&self.constraint);

        let Some(reason) = decision.deny_reason() else {
            // Granted: only the caller-level disabled flag applies;
            // title and style pass through untouched.
            let overlay = Props {
                disabled: self.disabled,
                ..Props::default()
            };
            return Node::Element(Element {
                props: overlay.merged_over(&child.props),
                ..child
            });
        };

        if !self.show_disabled {
            return Node::Empty;
        }

        let mut overlay = denied_affordance();
        overlay.disabled = true;
        overlay.title = Some(
            self.disabled_message
                .clone()
                .unwrap_or_else(|| reason.default_message()),
        );

        Node::Element(Element {
            props: overlay.merged_over(&child.props),
            ..child
        })
    }

    /// Like [`resolve`](Self::resolve), but enforces the single-child
    /// contract on a raw child list.
    ///
    /// # Errors
    ///
    /// - [`ElementError::ExpectedSingleChild`] for zero or several
    ///   children
    /// - [`ElementError::NotAnElement`] when the one child is not an
    ///   element
    pub fn resolve_children(
        &self,
        auth: &dyn AuthProvider,
        mut children: Vec<Node>,
    ) -> Result<Node, ElementError> {
        if children.len() != 1 {
            return Err(ElementError::ExpectedSingleChild {
                found: children.len(),
            });
        }
        match children.remove(0) {
            Node::Element(element) => Ok(self.resolve(auth, element)),
            other => Err(ElementError::NotAnElement { kind: other.kind() }),
        }
    }
}
