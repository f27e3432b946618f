//! Error types for the tab grouper.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use tab_grouper::{Host, Result, TabId};
//!
//! async fn example<H: Host>(host: &H, tab_id: TabId) -> Result<()> {
//!     let snapshot = host.get_tab(tab_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Lookup | [`Error::TabNotFound`], [`Error::GroupNotFound`] |
//! | Group command | [`Error::GroupCommand`] |
//! | Protocol | [`Error::Protocol`], [`Error::Json`] |
//!
//! URL parse failure is deliberately absent: it is not an error in this
//! system, it produces the "no domain" case consumed by the title fallback.
//! All errors are local to a single event; the dispatcher logs and moves on.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::identifiers::{GroupId, TabId};

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// Tab not found.
    ///
    /// Returned when the host no longer knows the tab (closed mid-operation
    /// or never existed).
    #[error("Tab not found: {tab_id}")]
    TabNotFound {
        /// The missing tab ID.
        tab_id: TabId,
    },

    /// Group not found.
    ///
    /// Returned when a group ID held by the registry no longer exists on
    /// the host side.
    #[error("Group not found: {group_id}")]
    GroupNotFound {
        /// The missing group ID.
        group_id: GroupId,
    },

    // ========================================================================
    // Group Command Errors
    // ========================================================================
    /// Host rejected a grouping command.
    ///
    /// Returned when group creation, membership change, or title update
    /// fails on the host side (e.g. tab already grouped elsewhere).
    #[error("Group command '{operation}' failed: {message}")]
    GroupCommand {
        /// The rejected operation (`create`, `add`, `update`).
        operation: String,
        /// Host-reported failure description.
        message: String,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Malformed event payload.
    ///
    /// Returned when an event lacks a required field or carries an invalid
    /// identifier.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a tab not found error.
    #[inline]
    pub fn tab_not_found(tab_id: TabId) -> Self {
        Self::TabNotFound { tab_id }
    }

    /// Creates a group not found error.
    #[inline]
    pub fn group_not_found(group_id: GroupId) -> Self {
        Self::GroupNotFound { group_id }
    }

    /// Creates a group command error.
    #[inline]
    pub fn group_command(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GroupCommand {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a lookup failure.
    ///
    /// Lookup failures abort the current decision chain without touching
    /// the registry.
    #[inline]
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::TabNotFound { .. } | Self::GroupNotFound { .. })
    }

    /// Returns `true` if this is a rejected group command.
    #[inline]
    #[must_use]
    pub fn is_group_command_failure(&self) -> bool {
        matches!(self, Self::GroupCommand { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::tab_not_found(TabId::from_raw(12));
        assert_eq!(err.to_string(), "Tab not found: 12");
    }

    #[test]
    fn test_group_command_display() {
        let err = Error::group_command("create", "tab is being dragged");
        assert_eq!(
            err.to_string(),
            "Group command 'create' failed: tab is being dragged"
        );
    }

    #[test]
    fn test_is_lookup_failure() {
        let tab_err = Error::tab_not_found(TabId::from_raw(1));
        let group_err = Error::group_not_found(GroupId::from_raw(2));
        let other_err = Error::protocol("missing tabId");

        assert!(tab_err.is_lookup_failure());
        assert!(group_err.is_lookup_failure());
        assert!(!other_err.is_lookup_failure());
    }

    #[test]
    fn test_is_group_command_failure() {
        let cmd_err = Error::group_command("add", "no such group");
        let other_err = Error::protocol("bad payload");

        assert!(cmd_err.is_group_command_failure());
        assert!(!other_err.is_group_command_failure());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
