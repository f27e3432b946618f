//! Tab→group registry.
//!
//! Process-wide bookkeeping for grouping decisions: which group each tab was
//! placed in, and which tabs founded a group. The registry never calls the
//! host; callers record outcomes here only after the corresponding host
//! command succeeded.
//!
//! Entries live for the extension's active lifetime; nothing persists across
//! restarts.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::{FxHashMap, FxHashSet};

use crate::identifiers::{GroupId, TabId};

// ============================================================================
// Registry
// ============================================================================

/// Mapping from tabs to the groups they were placed in, plus the set of
/// root tabs that founded a group.
///
/// All operations are O(1) average and mutate only this state.
#[derive(Debug, Default)]
pub struct Registry {
    /// Tab → group assignments.
    tab_to_group: FxHashMap<TabId, GroupId>,
    /// Tabs that founded a group via a typed navigation.
    roots: FxHashSet<TabId>,
}

impl Registry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group a tab was assigned to, if any.
    #[inline]
    #[must_use]
    pub fn group_of(&self, tab_id: TabId) -> Option<GroupId> {
        self.tab_to_group.get(&tab_id).copied()
    }

    /// Returns `true` if the tab has a group assignment.
    #[inline]
    #[must_use]
    pub fn contains(&self, tab_id: TabId) -> bool {
        self.tab_to_group.contains_key(&tab_id)
    }

    /// Records a tab's group assignment.
    ///
    /// A typed navigation can re-found a group for an already-assigned tab,
    /// so an existing assignment is overwritten.
    pub fn assign(&mut self, tab_id: TabId, group_id: GroupId) {
        self.tab_to_group.insert(tab_id, group_id);
    }

    /// Marks a tab as the root of its group.
    pub fn mark_root(&mut self, tab_id: TabId) {
        self.roots.insert(tab_id);
    }

    /// Returns `true` if the tab founded a group.
    #[inline]
    #[must_use]
    pub fn is_root(&self, tab_id: TabId) -> bool {
        self.roots.contains(&tab_id)
    }

    /// Removes a tab's assignment and root membership.
    ///
    /// Idempotent: removing an unknown tab is a no-op. Returns `true` when
    /// an assignment existed.
    pub fn remove(&mut self, tab_id: TabId) -> bool {
        let existed = self.tab_to_group.remove(&tab_id).is_some();
        self.roots.remove(&tab_id);
        existed
    }

    /// Returns the number of assigned tabs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tab_to_group.len()
    }

    /// Returns `true` if no tabs are assigned.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tab_to_group.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: u32) -> TabId {
        TabId::from_raw(id)
    }

    fn group(id: u32) -> GroupId {
        GroupId::from_raw(id)
    }

    #[test]
    fn test_assign_and_lookup() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.assign(tab(1), group(10));
        assert_eq!(registry.group_of(tab(1)), Some(group(10)));
        assert!(registry.contains(tab(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reassign_overwrites() {
        let mut registry = Registry::new();
        registry.assign(tab(1), group(10));
        registry.assign(tab(1), group(20));

        assert_eq!(registry.group_of(tab(1)), Some(group(20)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_roots() {
        let mut registry = Registry::new();
        registry.assign(tab(1), group(10));
        registry.mark_root(tab(1));

        assert!(registry.is_root(tab(1)));
        assert!(!registry.is_root(tab(2)));
    }

    #[test]
    fn test_remove_clears_assignment_and_root() {
        let mut registry = Registry::new();
        registry.assign(tab(1), group(10));
        registry.mark_root(tab(1));

        assert!(registry.remove(tab(1)));
        assert_eq!(registry.group_of(tab(1)), None);
        assert!(!registry.is_root(tab(1)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = Registry::new();
        registry.assign(tab(1), group(10));

        assert!(registry.remove(tab(1)));
        assert!(!registry.remove(tab(1)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_unknown_tab_is_noop() {
        let mut registry = Registry::new();
        registry.assign(tab(1), group(10));

        assert!(!registry.remove(tab(99)));
        assert_eq!(registry.len(), 1);
    }
}
