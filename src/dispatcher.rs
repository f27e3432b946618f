//! Event dispatcher.
//!
//! [`TabGrouper`] subscribes to host tab events, fetches the snapshots a
//! decision needs, applies the grouping policy, and issues host commands.
//! The registry is only updated after a host command succeeded.
//!
//! Handlers never propagate errors: every host failure is logged and the
//! event is dropped, so one bad event cannot stall the stream. No command
//! is ever retried.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tab_grouper::{Event, TabGrouper};
//! use tokio::sync::mpsc;
//!
//! # async fn example(host: Arc<impl tab_grouper::Host + 'static>) {
//! let grouper = TabGrouper::new(host);
//! let (tx, rx) = mpsc::unbounded_channel::<Event>();
//!
//! // Host adapter pushes raw events into tx...
//! grouper.run(rx).await;
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grouping::policy::{self, Decision};
use crate::grouping::registry::Registry;
use crate::host::Host;
use crate::identifiers::{FrameId, GroupId, TabId};
use crate::options::GrouperOptions;
use crate::protocol::{Event, ParsedEvent, TabStatus, TransitionType};

// ============================================================================
// TabGrouper
// ============================================================================

/// Drives grouping decisions from host tab events.
///
/// Owns the [`Registry`]; all mutations happen on the event-processing task.
/// The mutex is never held across an await, so overlapping host lookups from
/// interleaved events observe a consistent registry.
pub struct TabGrouper<H> {
    /// Host capability surface.
    host: Arc<H>,
    /// Tab→group bookkeeping.
    registry: Mutex<Registry>,
    /// Grouper configuration.
    options: GrouperOptions,
}

// ============================================================================
// TabGrouper - Constructors
// ============================================================================

impl<H: Host> TabGrouper<H> {
    /// Creates a grouper with default options.
    #[must_use]
    pub fn new(host: Arc<H>) -> Self {
        Self::with_options(host, GrouperOptions::new())
    }

    /// Creates a grouper with the given options.
    #[must_use]
    pub fn with_options(host: Arc<H>, options: GrouperOptions) -> Self {
        debug!(color = options.color.as_str(), eager = options.eager_grouping, "Grouper created");
        Self {
            host,
            registry: Mutex::new(Registry::new()),
            options,
        }
    }
}

// ============================================================================
// TabGrouper - Accessors
// ============================================================================

impl<H: Host> TabGrouper<H> {
    /// Returns the grouper options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &GrouperOptions {
        &self.options
    }

    /// Returns the group a tab was assigned to, if any.
    #[inline]
    #[must_use]
    pub fn group_of(&self, tab_id: TabId) -> Option<GroupId> {
        self.registry.lock().group_of(tab_id)
    }

    /// Returns `true` if the tab founded a group.
    #[inline]
    #[must_use]
    pub fn is_root(&self, tab_id: TabId) -> bool {
        self.registry.lock().is_root(tab_id)
    }

    /// Returns the number of tabs with a group assignment.
    #[inline]
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.registry.lock().len()
    }
}

// ============================================================================
// TabGrouper - Event Loop
// ============================================================================

impl<H: Host> TabGrouper<H> {
    /// Consumes raw events until the channel closes.
    ///
    /// Events are processed strictly one at a time, in delivery order.
    pub async fn run(&self, mut events: UnboundedReceiver<Event>) {
        info!("Tab grouper event loop started");
        while let Some(event) = events.recv().await {
            self.dispatch(event).await;
        }
        info!("Tab grouper event loop stopped");
    }

    /// Parses and handles a single raw event.
    pub async fn dispatch(&self, event: Event) {
        match event.parse() {
            ParsedEvent::TabCreated {
                tab_id,
                opener_tab_id,
                ..
            } => self.on_tab_created(tab_id, opener_tab_id).await,

            ParsedEvent::TabRemoved { tab_id } => self.on_tab_removed(tab_id),

            ParsedEvent::TabUpdated { tab_id, status, .. } => {
                self.on_tab_updated(tab_id, status).await;
            }

            ParsedEvent::NavigationCommitted {
                tab_id,
                frame_id,
                url,
                transition,
            } => {
                self.on_navigation_committed(tab_id, frame_id, &url, transition)
                    .await;
            }

            ParsedEvent::Unknown { method, .. } => {
                debug!(method = %method, "Ignoring unknown event");
            }
        }
    }
}

// ============================================================================
// TabGrouper - Event Handlers
// ============================================================================

impl<H: Host> TabGrouper<H> {
    /// Handles a freshly created tab.
    ///
    /// Groups the tab with its opener eagerly, from the creation payload
    /// alone. An opener that is not registered yet is skipped; the tab's
    /// first committed navigation gets another chance.
    pub async fn on_tab_created(&self, tab_id: TabId, opener_tab_id: Option<TabId>) {
        if !self.options.eager_grouping {
            return;
        }

        debug!(tab_id = %tab_id, opener = ?opener_tab_id, "Tab created");

        let decision = {
            let registry = self.registry.lock();
            policy::decide_tab_created(&registry, tab_id, opener_tab_id)
        };

        if let Err(e) = self.apply(decision).await {
            warn!(tab_id = %tab_id, error = %e, "Eager grouping failed");
        }
    }

    /// Handles a closed tab.
    ///
    /// Drops the tab's registry entry and root membership. Idempotent.
    pub fn on_tab_removed(&self, tab_id: TabId) {
        let existed = self.registry.lock().remove(tab_id);
        if existed {
            debug!(tab_id = %tab_id, "Tab removed from registry");
        }
    }

    /// Handles a tab property update.
    ///
    /// Only "load complete" matters here: the group title is re-derived
    /// from the tab's current URL (last writer wins).
    pub async fn on_tab_updated(&self, tab_id: TabId, status: Option<TabStatus>) {
        if status != Some(TabStatus::Complete) {
            return;
        }

        // Skip the host lookup entirely for tabs we never grouped.
        if !self.registry.lock().contains(tab_id) {
            return;
        }

        if let Err(e) = self.try_refresh_title(tab_id).await {
            if e.is_lookup_failure() {
                debug!(tab_id = %tab_id, error = %e, "Tab gone before title refresh");
            } else {
                warn!(tab_id = %tab_id, error = %e, "Title refresh failed");
            }
        }
    }

    /// Handles a committed navigation.
    ///
    /// Sub-frame navigations never trigger grouping decisions.
    pub async fn on_navigation_committed(
        &self,
        tab_id: TabId,
        frame_id: FrameId,
        url: &str,
        transition: TransitionType,
    ) {
        if !frame_id.is_main() {
            debug!(tab_id = %tab_id, frame_id = %frame_id, "Ignoring sub-frame navigation");
            return;
        }

        if let Err(e) = self.try_navigation_committed(tab_id, url, transition).await {
            if e.is_lookup_failure() {
                debug!(tab_id = %tab_id, error = %e, "Tab gone during grouping decision");
            } else {
                warn!(tab_id = %tab_id, url = %url, error = %e, "Grouping failed");
            }
        }
    }
}

// ============================================================================
// TabGrouper - Internal
// ============================================================================

impl<H: Host> TabGrouper<H> {
    /// Decides and applies grouping for a committed main-frame navigation.
    async fn try_navigation_committed(
        &self,
        tab_id: TabId,
        url: &str,
        transition: TransitionType,
    ) -> Result<()> {
        // The committed event carries no opener, so fetch a snapshot first.
        let snapshot = self.host.get_tab(tab_id).await?;

        let decision = {
            let registry = self.registry.lock();
            policy::decide_navigation_committed(&registry, &snapshot, url, transition)
        };

        self.apply(decision).await
    }

    /// Re-derives and applies a group title for a fully loaded tab.
    async fn try_refresh_title(&self, tab_id: TabId) -> Result<()> {
        let snapshot = self.host.get_tab(tab_id).await?;

        let decision = {
            let registry = self.registry.lock();
            policy::decide_load_complete(&registry, &snapshot)
        };

        self.apply(decision).await
    }

    /// Executes a decision against the host, recording outcomes in the
    /// registry only after the command succeeded.
    async fn apply(&self, decision: Decision) -> Result<()> {
        match decision {
            Decision::FoundGroup { tab_id, title } => self.found_group(tab_id, &title).await,

            Decision::JoinGroup { tab_id, group_id } => {
                self.host.add_to_group(group_id, &[tab_id]).await?;
                self.registry.lock().assign(tab_id, group_id);
                info!(tab_id = %tab_id, group_id = %group_id, "Tab joined group");
                Ok(())
            }

            Decision::RenameGroup { group_id, title } => {
                self.host.update_group_title(group_id, &title, None).await?;
                debug!(group_id = %group_id, title = %title, "Group title updated");
                Ok(())
            }

            Decision::Ignore => Ok(()),
        }
    }

    /// Creates a single-tab group and titles it.
    ///
    /// The tab is registered as soon as creation succeeds; a failed title
    /// update leaves the title stale but the grouping intact.
    async fn found_group(&self, tab_id: TabId, title: &str) -> Result<()> {
        let group_id = self.host.create_group(&[tab_id]).await?;

        {
            let mut registry = self.registry.lock();
            registry.assign(tab_id, group_id);
            registry.mark_root(tab_id);
        }
        info!(tab_id = %tab_id, group_id = %group_id, title = %title, "Group founded");

        if let Err(e) = self
            .host
            .update_group_title(group_id, title, Some(self.options.color))
            .await
        {
            warn!(group_id = %group_id, title = %title, error = %e, "Titling new group failed");
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
