//! # chain-reconciler
//!
//! In-memory reconciliation of a chain network graph against incremental
//! updates.
//!
//! The reconciler answers one question:
//!
//! > Given the current graph snapshot and a partial update, what is the next
//! > consistent snapshot?
//!
//! ## Core Contract
//!
//! 1. A full payload installs a snapshot wholesale ([`reconcile::replace`])
//! 2. A partial update folds into the current snapshot without disturbing
//!    unrelated state ([`reconcile::merge`])
//! 3. Every transition returns a fresh value; inputs are never mutated
//!
//! ## Architecture
//!
//! ```text
//! NetworkAction → validate → reconcile::apply → ChainNetworksState
//!                                   ↓
//!                          NetworkFingerprint
//! ```
//!
//! ## Guarantees
//!
//! - Node names stay unique across any sequence of merges after a replace
//! - Node order is stable: current nodes first, new nodes appended
//! - Connection removal applies strictly after addition within one update
//! - Array-valued node fields are overwritten by updates, never concatenated

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod merge;
pub mod reconcile;
pub mod fingerprint;
pub mod store;

// Re-exports
pub use types::{ChainNetworks, ChainNode, Connection, NetworkUpdate, NodeName, NodeStatus, UpdateError};
pub use merge::{merge_objects, merge_values, ArrayMergePolicy};
pub use reconcile::{ChainNetworksState, NetworkAction};
pub use fingerprint::NetworkFingerprint;
pub use store::NetworkStore;

/// Schema version for all chain network types.
/// Increment on breaking changes to any schema type.
pub const NETWORK_SCHEMA_VERSION: &str = "1.0.0";
