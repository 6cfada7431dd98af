//! Role identifiers.
//!
//! A [`Role`] is the coarse-grained half of the access model: each user
//! holds exactly one role, and constraints may require a specific role.
//! The fine-grained half is [`Permission`](crate::Permission).

use serde::{Deserialize, Serialize};

/// A user's role.
///
/// Four roles are known to this crate. Role ids outside the closed set
/// are carried verbatim in [`Role::Other`] so that an auth provider can
/// introduce roles without breaking deserialization — display layers
/// render the raw id for those.
///
/// # Parsing
///
/// [`parse`](Self::parse) is total and case-insensitive for the known
/// roles; anything else becomes `Other` with the original spelling.
///
/// # Example
///
/// ```
/// use scenegate_types::Role;
///
/// assert_eq!(Role::parse("admin"), Role::Admin);
/// assert_eq!(Role::parse("VIEWER"), Role::Viewer);
/// assert_eq!(Role::parse("auditor"), Role::Other("auditor".to_string()));
/// assert_eq!(Role::Manager.as_str(), "manager");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Manages operators and day-to-day scheduling.
    Manager,
    /// Operates equipment through the viewer.
    Operator,
    /// Read-only access.
    Viewer,
    /// A role id this crate does not know about, kept verbatim.
    Other(String),
}

impl Role {
    /// Parses a role id (case-insensitive for the known roles).
    ///
    /// Never fails: unknown ids are preserved as [`Role::Other`].
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            "operator" => Self::Operator,
            "viewer" => Self::Viewer,
            _ => Self::Other(id.to_string()),
        }
    }

    /// Returns the canonical id for known roles, the raw id otherwise.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Operator => "operator",
            Self::Viewer => "viewer",
            Self::Other(id) => id,
        }
    }

    /// Returns `true` if this is one of the four known roles.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Role {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
