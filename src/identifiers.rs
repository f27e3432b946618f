//! Type-safe identifiers for host entities.
//!
//! Newtype wrappers prevent mixing incompatible IDs at compile time.
//! The host reports "no tab" / "no group" as a negative sentinel; the
//! constructors map that sentinel to `None` so core code never compares
//! against raw magic values.
//!
//! | Type | Wraps | Host sentinel |
//! |------|-------|---------------|
//! | [`TabId`] | `u32` | `-1` (no tab) |
//! | [`GroupId`] | `u32` | `-1` (tab not in any group) |
//! | [`FrameId`] | `u64` | n/a (`0` is the main frame) |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// TabId
// ============================================================================

/// Identifier for a host tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(u32);

impl TabId {
    /// Creates a tab ID from a raw host value.
    ///
    /// Returns `None` for negative values (the host's "no tab" sentinel)
    /// and for values outside the `u32` range.
    #[inline]
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }

    /// Creates a tab ID from an already-validated value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// GroupId
// ============================================================================

/// Identifier for a host tab group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u32);

impl GroupId {
    /// Creates a group ID from a raw host value.
    ///
    /// Returns `None` for negative values, which is how the host reports
    /// "tab is not in any group".
    #[inline]
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }

    /// Creates a group ID from an already-validated value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// FrameId
// ============================================================================

/// Identifier for a frame within a tab.
///
/// Frame `0` is the main (top-level) frame; all other values are sub-frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(u64);

impl FrameId {
    /// Creates a frame ID from a raw host value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the main-frame ID.
    #[inline]
    #[must_use]
    pub const fn main() -> Self {
        Self(0)
    }

    /// Returns `true` if this is the main (top-level) frame.
    #[inline]
    #[must_use]
    pub const fn is_main(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_id_rejects_sentinel() {
        assert_eq!(TabId::new(-1), None);
        assert_eq!(TabId::new(42).map(TabId::get), Some(42));
    }

    #[test]
    fn test_group_id_rejects_sentinel() {
        assert_eq!(GroupId::new(-1), None);
        assert_eq!(GroupId::new(7).map(GroupId::get), Some(7));
    }

    #[test]
    fn test_frame_id_main() {
        assert!(FrameId::main().is_main());
        assert!(!FrameId::new(3).is_main());
    }

    #[test]
    fn test_display() {
        let tab = TabId::from_raw(5);
        let group = GroupId::from_raw(9);
        assert_eq!(tab.to_string(), "5");
        assert_eq!(group.to_string(), "9");
    }

    #[test]
    fn test_serde_transparent() {
        let tab: TabId = serde_json::from_str("12").expect("deserialize");
        assert_eq!(tab, TabId::from_raw(12));
        assert_eq!(serde_json::to_string(&tab).expect("serialize"), "12");
    }
}
