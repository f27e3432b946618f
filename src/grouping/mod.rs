//! Grouping core: title derivation, registry, and policy.
//!
//! Everything in this module is synchronous and host-free. The
//! [`dispatcher`](crate::dispatcher) drives these pieces from host events.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `title` | Pure URL → group label derivation |
//! | `registry` | Tab→group assignments and root-tab set |
//! | `policy` | Grouping decisions (typed-navigation founding) |

// ============================================================================
// Submodules
// ============================================================================

/// Domain and title derivation for group labels.
pub mod title;

/// Tab→group registry.
pub mod registry;

/// Grouping policy decisions.
pub mod policy;

// ============================================================================
// Re-exports
// ============================================================================

pub use policy::Decision;
pub use registry::Registry;
pub use title::{domain_from_url, group_title_for_tab};
