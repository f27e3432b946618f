//! Host event message types.
//!
//! This module defines the raw format in which the host delivers tab
//! lifecycle and navigation notifications.
//!
//! # Event Naming
//!
//! Events follow `module.eventName` format:
//!
//! - `tabs.created`
//! - `tabs.removed`
//! - `tabs.updated`
//! - `webNavigation.committed`
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | Raw and parsed event types |

// ============================================================================
// Submodules
// ============================================================================

/// Event message types.
pub mod event;

// ============================================================================
// Re-exports
// ============================================================================

pub use event::{Event, ParsedEvent, TabStatus, TransitionType};
