//! Badge theming.
//!
//! All fields default, so an empty (or absent) theme file means
//! built-in badge styles throughout.

use scenegate_types::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A foreground/background color pair for a badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeColors {
    /// Foreground (text) color.
    pub fg: String,
    /// Background color.
    pub bg: String,
}

/// Display theme for the gating components.
///
/// # Serialization
///
/// Serializes to TOML. Roles are keyed by their canonical id:
///
/// ```toml
/// [badges.operator]
/// fg = "#000000"
/// bg = "#80cbc4"
/// ```
///
/// # Example
///
/// ```
/// use scenegate_ui::Theme;
///
/// let theme = Theme::from_toml("[badges.admin]\nfg = \"#fff\"\nbg = \"#b71c1c\"\n")
///     .expect("valid theme");
/// assert_eq!(theme.badges.len(), 1);
///
/// let empty = Theme::default();
/// assert!(empty.badges.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Per-role badge color overrides, keyed by role id.
    pub badges: BTreeMap<String, BadgeColors>,
}

impl Theme {
    /// Creates an empty theme (built-in styles everywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The override colors for a role, if this theme names it.
    #[must_use]
    pub fn badge_colors(&self, role: &Role) -> Option<&BadgeColors> {
        self.badges.get(role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_no_overrides() {
        let theme = Theme::new();
        assert!(theme.badge_colors(&Role::Admin).is_none());
        assert!(theme.badge_colors(&Role::Other("auditor".into())).is_none());
    }

    #[test]
    fn from_toml_reads_overrides() {
        let theme = Theme::from_toml(
            r##"
            [badges.operator]
            fg = "#000000"
            bg = "#80cbc4"
            "##,
        )
        .expect("valid theme");

        let colors = theme.badge_colors(&Role::Operator).expect("override");
        assert_eq!(colors.fg, "#000000");
        assert_eq!(colors.bg, "#80cbc4");
        assert!(theme.badge_colors(&Role::Admin).is_none());
    }

    #[test]
    fn unknown_roles_can_be_themed_by_raw_id() {
        let theme = Theme::from_toml(
            r##"
            [badges.auditor]
            fg = "#ffffff"
            bg = "#4a148c"
            "##,
        )
        .expect("valid theme");

        assert!(theme.badge_colors(&Role::Other("auditor".into())).is_some());
    }

    #[test]
    fn empty_toml_is_default() {
        let theme = Theme::from_toml("").expect("empty is valid");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn toml_roundtrip() {
        let mut theme = Theme::new();
        theme.badges.insert(
            "viewer".to_string(),
            BadgeColors {
                fg: "#fff".to_string(),
                bg: "#333".to_string(),
            },
        );

        let toml_str = theme.to_toml().expect("serialize");
        let parsed = Theme::from_toml(&toml_str).expect("deserialize");
        assert_eq!(parsed, theme);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Theme::from_toml("[badges.operator\nfg=").is_err());
    }
}
