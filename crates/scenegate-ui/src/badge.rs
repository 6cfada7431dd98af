//! Role badges.
//!
//! Pure display: a role maps to a `{label, fg, bg}` triple through a
//! static table, with [`Theme`](crate::Theme) overrides layered on
//! top. No permission logic lives here.

use crate::{Element, Node, Theme};
use scenegate_types::Role;
use serde::{Deserialize, Serialize};

/// Neutral colors for roles outside the known set.
const NEUTRAL_FG: &str = "#37474f";
const NEUTRAL_BG: &str = "#eceff1";

/// How a role renders: label plus a foreground/background color pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyle {
    /// Human-readable role label.
    pub label: String,
    /// Foreground (text) color.
    pub fg: String,
    /// Background color.
    pub bg: String,
}

impl BadgeStyle {
    /// The built-in style for a role.
    ///
    /// The four known roles get fixed label/color triples; unknown
    /// roles display their raw id over a neutral pair.
    #[must_use]
    pub fn default_for(role: &Role) -> Self {
        let (label, fg, bg) = match role {
            Role::Admin => ("Administrator", "#ffffff", "#c62828"),
            Role::Manager => ("Manager", "#ffffff", "#ef6c00"),
            Role::Operator => ("Operator", "#ffffff", "#1565c0"),
            Role::Viewer => ("Viewer", "#ffffff", "#546e7a"),
            Role::Other(id) => (id.as_str(), NEUTRAL_FG, NEUTRAL_BG),
        };
        Self {
            label: label.to_string(),
            fg: fg.to_string(),
            bg: bg.to_string(),
        }
    }
}

/// Displays a user's role as a colored badge.
#[derive(Debug, Clone)]
pub struct RoleBadge {
    role: Role,
}

impl RoleBadge {
    /// Badge for a role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// The effective style under a theme: theme colors when the theme
    /// names this role, built-in style otherwise.
    #[must_use]
    pub fn style(&self, theme: &Theme) -> BadgeStyle {
        let mut style = BadgeStyle::default_for(&self.role);
        if let Some(colors) = theme.badge_colors(&self.role) {
            style.fg = colors.fg.clone();
            style.bg = colors.bg.clone();
        }
        style
    }

    /// Renders the badge as a `span` carrying the label and colors.
    #[must_use]
    pub fn render(&self, theme: &Theme) -> Node {
        let style = self.style(theme);
        Element::new("span")
            .attr("class", "role-badge")
            .style("color", style.fg)
            .style("background", style.bg)
            .child(Node::text(style.label))
            .into()
    }
}
