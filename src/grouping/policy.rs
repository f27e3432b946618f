//! Grouping policy: typed-navigation founding with flat inheritance.
//!
//! Pure decision functions over the [`Registry`] and event data. The
//! dispatcher executes decisions against the host and records outcomes in
//! the registry afterwards; nothing in this module performs I/O.
//!
//! # Rules
//!
//! | Event | Rule |
//! |-------|------|
//! | Navigation committed, typed | Found a single-tab group; tab becomes a root |
//! | Navigation committed, other | Join the opener's group if the tab is unassigned |
//! | Tab created | Eagerly join the opener's group if the opener is assigned |
//! | Load complete | Re-derive the group title from the new URL |
//!
//! An opener that is not (yet) in the registry is a skip, never an error;
//! a later navigation-committed event gets another chance to group the tab.

// ============================================================================
// Imports
// ============================================================================

use crate::host::TabSnapshot;
use crate::identifiers::{GroupId, TabId};
use crate::protocol::TransitionType;

use super::registry::Registry;
use super::title::group_title_for_tab;

// ============================================================================
// Decision
// ============================================================================

/// Outcome of a policy decision, to be executed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Create a new group containing only this tab, titled and marked root.
    FoundGroup {
        /// The founding tab.
        tab_id: TabId,
        /// Derived group title.
        title: String,
    },

    /// Add the tab to an existing group.
    JoinGroup {
        /// The tab to add.
        tab_id: TabId,
        /// The group to join.
        group_id: GroupId,
    },

    /// Update a group's title after a navigation change.
    RenameGroup {
        /// The group to rename.
        group_id: GroupId,
        /// Re-derived title.
        title: String,
    },

    /// No action for this event.
    Ignore,
}

impl Decision {
    /// Returns `true` if this decision performs no host command.
    #[inline]
    #[must_use]
    pub const fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }
}

// ============================================================================
// Decisions
// ============================================================================

/// Decides on a committed main-frame navigation.
///
/// A typed navigation founds a new group regardless of current assignment.
/// Any other transition joins the opener's group, but only when the tab has
/// no assignment of its own yet.
#[must_use]
pub fn decide_navigation_committed(
    registry: &Registry,
    tab: &TabSnapshot,
    url: &str,
    transition: TransitionType,
) -> Decision {
    if transition.is_typed() {
        return Decision::FoundGroup {
            tab_id: tab.id,
            title: group_title_for_tab(Some(url), tab.title.as_deref()),
        };
    }

    if registry.contains(tab.id) {
        return Decision::Ignore;
    }

    match tab.opener_tab_id.and_then(|opener| registry.group_of(opener)) {
        Some(group_id) => Decision::JoinGroup {
            tab_id: tab.id,
            group_id,
        },
        None => Decision::Ignore,
    }
}

/// Decides on a freshly created tab.
///
/// Grouping happens eagerly from the creation payload so the tab does not
/// have to wait for its first navigation.
#[must_use]
pub fn decide_tab_created(
    registry: &Registry,
    tab_id: TabId,
    opener_tab_id: Option<TabId>,
) -> Decision {
    if registry.contains(tab_id) {
        return Decision::Ignore;
    }

    match opener_tab_id.and_then(|opener| registry.group_of(opener)) {
        Some(group_id) => Decision::JoinGroup { tab_id, group_id },
        None => Decision::Ignore,
    }
}

/// Decides on a tab that finished loading.
///
/// Re-derives the group title from the tab's current URL. Last writer wins;
/// titles are not reconciled across group members.
#[must_use]
pub fn decide_load_complete(registry: &Registry, tab: &TabSnapshot) -> Decision {
    match registry.group_of(tab.id) {
        Some(group_id) => Decision::RenameGroup {
            group_id,
            title: group_title_for_tab(tab.url.as_deref(), tab.title.as_deref()),
        },
        None => Decision::Ignore,
    }
}

// ============================================================================
// Tests
// ============================================================================
