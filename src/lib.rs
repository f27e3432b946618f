//! Tab Grouper - Automatic browser tab grouping library.
//!
//! This library organizes browser tabs into visual groups based on
//! navigation relationships and domain. It consumes a stream of
//! tab-lifecycle and navigation events from a host browser, maintains an
//! in-memory tab→group registry, and issues grouping commands back to the
//! host.
//!
//! # Architecture
//!
//! The grouper is a pure in-process event reactor:
//!
//! - **Host (browser)**: owns tabs and groups, delivers events, executes
//!   grouping commands behind the [`Host`] trait
//! - **Grouper (this crate)**: decides group membership, founds groups on
//!   typed navigations, keeps titles synchronized
//!
//! Key design principles:
//!
//! - Typed navigations found groups; child tabs inherit the opener's group
//! - The registry records an assignment only after the host command succeeded
//! - Host failures are logged and skipped, never retried, never propagated
//! - Events are processed one at a time, in delivery order
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tab_grouper::{Event, Host, TabGrouper};
//! use tokio::sync::mpsc;
//!
//! # async fn example(host: Arc<impl Host + 'static>) {
//! let grouper = TabGrouper::new(host);
//! let (tx, rx) = mpsc::unbounded_channel::<Event>();
//!
//! // The host adapter pushes raw events into tx as the browser fires them.
//! grouper.run(rx).await;
//! # }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`dispatcher`] | Event loop: [`TabGrouper`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`grouping`] | Registry, policy, and title derivation |
//! | [`host`] | [`Host`] capability trait and tab snapshots |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`options`] | [`GrouperOptions`] configuration |
//! | [`protocol`] | Raw host event types |

// ============================================================================
// Modules
// ============================================================================

/// Event dispatcher driving grouping decisions.
///
/// [`TabGrouper`] consumes host events and applies the grouping policy.
pub mod dispatcher;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Grouping core: title derivation, registry, and policy.
pub mod grouping;

/// Host capability surface.
///
/// The [`Host`] trait abstracts the browser's tab and group commands.
pub mod host;

/// Type-safe identifiers for host entities.
///
/// Newtype wrappers prevent mixing incompatible IDs at compile time.
pub mod identifiers;

/// Grouper configuration options.
pub mod options;

/// Host event message types.
pub mod protocol;

// ============================================================================
// Re-exports
// ============================================================================

// Dispatcher types
pub use dispatcher::TabGrouper;

// Error types
pub use error::{Error, Result};

// Grouping types
pub use grouping::{Decision, Registry, domain_from_url, group_title_for_tab};

// Host types
pub use host::{GroupColor, Host, TabSnapshot};

// Identifier types
pub use identifiers::{FrameId, GroupId, TabId};

// Option types
pub use options::GrouperOptions;

// Protocol types
pub use protocol::{Event, ParsedEvent, TabStatus, TransitionType};
