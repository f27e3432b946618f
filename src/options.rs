//! Grouper configuration options.
//!
//! # Example
//!
//! ```
//! use tab_grouper::{GrouperOptions, GroupColor};
//!
//! let options = GrouperOptions::new()
//!     .with_color(GroupColor::Cyan)
//!     .with_eager_grouping(false);
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::host::GroupColor;

// ============================================================================
// GrouperOptions
// ============================================================================

/// Configuration for the tab grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrouperOptions {
    /// Color applied to newly founded groups.
    pub color: GroupColor,

    /// Group freshly created tabs from the creation event, before their
    /// first navigation commits. When disabled, grouping waits for the
    /// tab's first committed navigation.
    pub eager_grouping: bool,
}

// ============================================================================
// Constructors
// ============================================================================

impl GrouperOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: GroupColor::Blue,
            eager_grouping: true,
        }
    }
}

impl Default for GrouperOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl GrouperOptions {
    /// Sets the color for newly founded groups.
    #[inline]
    #[must_use]
    pub const fn with_color(mut self, color: GroupColor) -> Self {
        self.color = color;
        self
    }

    /// Enables or disables eager grouping on tab creation.
    #[inline]
    #[must_use]
    pub const fn with_eager_grouping(mut self, eager: bool) -> Self {
        self.eager_grouping = eager;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
