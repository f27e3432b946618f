//! Host capability surface.
//!
//! The browser owns tabs and groups; this crate only reads tab snapshots and
//! issues grouping commands. [`Host`] abstracts that surface so the grouping
//! logic stays independent of any concrete extension API and can be driven
//! by a mock in tests.
//!
//! # Capability Surface
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | [`Host::get_tab`] | Fetch a [`TabSnapshot`] by ID |
//! | [`Host::create_group`] | Create a group containing the given tabs |
//! | [`Host::add_to_group`] | Add tabs to an existing group |
//! | [`Host::update_group_title`] | Set a group's title (and optionally color) |
//!
//! All operations are asynchronous and may fail; failures are local to one
//! grouping decision and are never retried.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identifiers::{GroupId, TabId};

// ============================================================================
// TabSnapshot
// ============================================================================

/// A point-in-time view of a host tab.
///
/// Snapshots are fetched on demand and never stored; only identifiers and
/// derived titles outlive a single grouping decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    /// The tab's ID.
    pub id: TabId,

    /// Tab this one was spawned from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,

    /// Current URL, if the host exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Current page title, if the host exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Group membership, `None` when ungrouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl TabSnapshot {
    /// Creates a snapshot with only an ID; all other fields unset.
    #[inline]
    #[must_use]
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            opener_tab_id: None,
            url: None,
            title: None,
            group_id: None,
        }
    }

    /// Returns `true` if the tab currently belongs to a group.
    #[inline]
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        self.group_id.is_some()
    }
}

// ============================================================================
// GroupColor
// ============================================================================

/// Color of a host tab group.
///
/// Matches the host's group color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupColor {
    /// Grey.
    Grey,
    /// Blue (default for newly founded groups).
    #[default]
    Blue,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Pink.
    Pink,
    /// Purple.
    Purple,
    /// Cyan.
    Cyan,
    /// Orange.
    Orange,
}

impl GroupColor {
    /// Returns the host wire name for this color.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
        }
    }
}

// ============================================================================
// Host Trait
// ============================================================================

/// Asynchronous capability surface provided by the browser.
///
/// Implementations forward to the actual extension API; tests use an
/// in-memory mock. All methods are issued sequentially by the dispatcher,
/// one host call awaited before the next dependent one.
#[async_trait]
pub trait Host: Send + Sync {
    /// Fetches a snapshot of the given tab.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TabNotFound`](crate::Error::TabNotFound) when the
    /// tab no longer exists.
    async fn get_tab(&self, tab_id: TabId) -> Result<TabSnapshot>;

    /// Creates a new group containing the given tabs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupCommand`](crate::Error::GroupCommand) when the
    /// host rejects the creation.
    async fn create_group(&self, tab_ids: &[TabId]) -> Result<GroupId>;

    /// Adds tabs to an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupCommand`](crate::Error::GroupCommand) when the
    /// host rejects the membership change.
    async fn add_to_group(&self, group_id: GroupId, tab_ids: &[TabId]) -> Result<()>;

    /// Sets a group's title, and its color when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupCommand`](crate::Error::GroupCommand) when the
    /// host rejects the update.
    async fn update_group_title(
        &self,
        group_id: GroupId,
        title: &str,
        color: Option<GroupColor>,
    ) -> Result<()>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserializes_host_payload() {
        let json_str = r#"{
            "id": 7,
            "openerTabId": 3,
            "url": "https://example.com",
            "title": "Example"
        }"#;

        let snapshot: TabSnapshot = serde_json::from_str(json_str).expect("deserialize");
        assert_eq!(snapshot.id, TabId::from_raw(7));
        assert_eq!(snapshot.opener_tab_id, Some(TabId::from_raw(3)));
        assert!(!snapshot.is_grouped());
    }

    #[test]
    fn test_group_color_wire_names() {
        assert_eq!(GroupColor::Blue.as_str(), "blue");
        assert_eq!(GroupColor::Grey.as_str(), "grey");
        assert_eq!(GroupColor::default(), GroupColor::Blue);
    }

    #[test]
    fn test_host_is_object_safe() {
        fn assert_object_safe(_: &dyn Host) {}
        let _ = assert_object_safe;
    }
}
