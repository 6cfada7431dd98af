//! Access decision types.

use scenegate_types::{Permission, Role};
use serde::{Deserialize, Serialize};

/// The outcome of evaluating a [`Constraint`](crate::Constraint)
/// against the current user snapshot.
///
/// Denial is an ordinary, expected value — not an error. Callers that
/// only need the boolean use [`is_granted`](Self::is_granted); display
/// layers match on the [`DenyReason`] to pick fallback content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Access granted.
    Granted,
    /// Access denied, with the highest-priority reason.
    Denied(DenyReason),
}

impl Decision {
    /// Returns `true` if access was granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns the denial reason, or `None` if granted.
    #[must_use]
    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Self::Granted => None,
            Self::Denied(reason) => Some(reason),
        }
    }
}

/// Why access was denied.
///
/// Reasons are checked in a fixed priority order, so a logged-out user
/// is always reported as `NotLoggedIn` even when the constraint also
/// names a role or permissions they would lack:
///
/// 1. [`NotLoggedIn`](Self::NotLoggedIn)
/// 2. [`RoleInsufficient`](Self::RoleInsufficient)
/// 3. [`PermissionInsufficient`](Self::PermissionInsufficient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DenyReason {
    /// No user is logged in.
    NotLoggedIn,
    /// The user does not hold the required role.
    RoleInsufficient {
        /// The role the constraint requires.
        required: Role,
    },
    /// The user is missing at least one required permission.
    PermissionInsufficient {
        /// The first missing permission, in constraint order.
        missing: Permission,
    },
}

impl DenyReason {
    /// The default fallback message for this denial.
    ///
    /// Three distinct messages, one per reason, used by guards when the
    /// caller supplies no fallback content of their own.
    #[must_use]
    pub fn default_message(&self) -> String {
        match self {
            Self::NotLoggedIn => "Please log in to continue.".to_string(),
            Self::RoleInsufficient { required } => {
                format!("Your role does not allow this. Required role: {required}.")
            }
            Self::PermissionInsufficient { missing } => {
                format!("You do not have the required permission: {missing}.")
            }
        }
    }

    /// Short machine-friendly label ("not_logged_in", "role", "permission").
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => "not_logged_in",
            Self::RoleInsufficient { .. } => "role",
            Self::PermissionInsufficient { .. } => "permission",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoggedIn => write!(f, "not logged in"),
            Self::RoleInsufficient { required } => write!(f, "requires role {required}"),
            Self::PermissionInsufficient { missing } => {
                write!(f, "missing permission {missing}")
            }
        }
    }
}
