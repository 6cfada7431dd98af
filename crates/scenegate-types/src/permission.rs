//! Permission identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An opaque permission identifier (e.g. `"equipment.view"`).
///
/// Permissions model the fine-grained half of the access model: a user
/// either holds a given id or not. No hierarchy, wildcard, or implication
/// between ids is modeled here — any such relationship belongs to the
/// capability provider.
///
/// Backed by `Cow<'static, str>` so the common case (literal ids at
/// call sites) allocates nothing.
///
/// # Example
///
/// ```
/// use scenegate_types::Permission;
///
/// let view = Permission::new("equipment.view");
/// assert_eq!(view.as_str(), "equipment.view");
/// assert_eq!(view, Permission::new(String::from("equipment.view")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Creates a permission from a literal or owned id.
    #[must_use]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the permission id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Permission {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Permission {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
