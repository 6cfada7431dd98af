//! Identity summary display.

use crate::{BadgeStyle, Element, Node, RoleBadge, Theme};
use scenegate_auth::AuthProvider;
use scenegate_types::User;

/// Placeholder text rendered when nobody is logged in.
const NOT_LOGGED_IN: &str = "Not logged in";

/// Display format for the last-login timestamp.
const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// The display-ready identity summary derived from a [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdentitySummary {
    /// Avatar initial: first character of the display name, uppercased.
    pub initial: char,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Role badge style under the active theme.
    pub badge: BadgeStyle,
    /// Department, verbatim.
    pub department: String,
    /// Formatted last login, if the provider recorded one.
    pub last_login: Option<String>,
}

impl IdentitySummary {
    /// Derives a summary from a user snapshot.
    #[must_use]
    pub fn from_user(user: &User, theme: &Theme) -> Self {
        let initial = user
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');

        Self {
            initial,
            name: user.name.clone(),
            username: user.username.clone(),
            badge: RoleBadge::new(user.role.clone()).style(theme),
            department: user.department.clone(),
            last_login: user
                .last_login
                .map(|at| at.format(LAST_LOGIN_FORMAT).to_string()),
        }
    }
}

/// Read-only identity panel.
///
/// Renders who is logged in (initial, name, username, role badge,
/// department, last login) or a placeholder when nobody is. The only
/// logic is the presence check — access decisions stay in the guards.
///
/// # Example
///
/// ```
/// use scenegate_auth::SnapshotAuth;
/// use scenegate_types::{Role, User};
/// use scenegate_ui::PermissionInfo;
///
/// let info = PermissionInfo::new();
/// let auth = SnapshotAuth::logged_in(User::new("Dana Ito", "dito", Role::Operator, "Maintenance"));
///
/// let summary = info.summarize(&auth).expect("logged in");
/// assert_eq!(summary.initial, 'D');
/// assert_eq!(summary.badge.label, "Operator");
///
/// assert!(info.summarize(&SnapshotAuth::logged_out()).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermissionInfo {
    theme: Theme,
}

impl PermissionInfo {
    /// Identity panel with the built-in theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity panel with a custom theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// The summary for the current user, or `None` when logged out.
    #[must_use]
    pub fn summarize(&self, auth: &dyn AuthProvider) -> Option<IdentitySummary> {
        auth.current_user()
            .map(|user| IdentitySummary::from_user(&user, &self.theme))
    }

    /// Renders the identity panel, or the placeholder when logged out.
    #[must_use]
    pub fn render(&self, auth: &dyn AuthProvider) -> Node {
        let Some(summary) = self.summarize(auth) else {
            return Element::new("div")
                .attr("class", "permission-info permission-info-empty")
                .child(Node::text(NOT_LOGGED_IN))
                .into();
        };

        let mut panel = Element::new("div")
            .attr("class", "permission-info")
            .child(
                Element::new("span")
                    .attr("class", "avatar")
                    .child(Node::text(summary.initial.to_string())),
            )
            .child(Node::text(summary.name))
            .child(Node::text(format!("@{}", summary.username)))
            .child(
                Element::new("span")
                    .attr("class", "role-badge")
                    .style("color", summary.badge.fg)
                    .style("background", summary.badge.bg)
                    .child(Node::text(summary.badge.label)),
            )
            .child(Node::text(summary.department));

        if let Some(last_login) = summary.last_login {
            panel = panel.child(Node::text(format!("Last login: {last_login}")));
        }

        panel.into()
    }
}
