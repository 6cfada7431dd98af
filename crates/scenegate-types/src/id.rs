//! Identifier types for scenegate.
//!
//! Identifiers are UUID-based so that identity snapshots can be
//! serialized and compared across processes without coordination.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a user known to the capability provider.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for UserId.**
///
/// There is no sensible default identity. A `UserId` always belongs
/// to a concrete user supplied by the auth provider; construct one
/// with [`UserId::new`] or deserialize it from the provider's data.
///
/// # Example
///
/// ```
/// use scenegate_types::UserId;
///
/// let id1 = UserId::new();
/// let id2 = UserId::new();
/// assert_ne!(id1, id2);
/// assert!(format!("{id1}").starts_with("user:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random (v4) user id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}
