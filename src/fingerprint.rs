//! Deterministic snapshot identity.
//!
//! A [`NetworkFingerprint`] captures a stable hash of a snapshot's contents
//! so downstream consumers can reference exactly which graph state they were
//! computed against. Hashing is order-independent: two snapshots equal up to
//! reordering of nodes or connections produce the same fingerprint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use xxhash_rust::xxh64::xxh64;

use crate::types::ChainNetworks;
use crate::NETWORK_SCHEMA_VERSION;

/// Serialize to canonical JSON bytes and hash, returned as a hex string.
///
/// Struct fields serialize in declaration order and vectors in index order,
/// so the same value always hashes identically. Callers must pre-sort any
/// collection whose order is not semantically meaningful.
fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).expect("canonical serialization failed");
    format!("{:016x}", xxh64(&bytes, 0))
}

/// A deterministic fingerprint of a chain network snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFingerprint {
    /// Unique identifier for this snapshot state (xxh64 of all components).
    pub fingerprint: String,
    /// Number of nodes in the snapshot.
    pub node_count: u64,
    /// Number of connections in the snapshot.
    pub connection_count: u64,
    /// Schema version the snapshot types carry.
    pub schema_version: String,
    /// Hash of sorted node names.
    pub node_name_hash: String,
    /// Hash of sorted connection endpoint pairs.
    pub connection_hash: String,
}

/// Internal struct for computing the top-level fingerprint hash.
#[derive(Serialize)]
struct FingerprintInput {
    node_count: u64,
    connection_count: u64,
    schema_version: String,
    node_name_hash: String,
    connection_hash: String,
}

impl NetworkFingerprint {
    /// Compute the fingerprint of a snapshot.
    pub fn compute(networks: &ChainNetworks) -> Self {
        let node_count = networks.nodes.len() as u64;
        let connection_count = networks.connections.len() as u64;

        let sorted_names: BTreeSet<&str> =
            networks.nodes.iter().map(|n| n.name.as_str()).collect();
        let node_name_hash = canonical_hash_hex(&sorted_names);

        let mut pairs: Vec<(&str, &str)> = networks
            .connections
            .iter()
            .map(|c| (c.node_a.as_str(), c.node_b.as_str()))
            .collect();
        pairs.sort();
        let connection_hash = canonical_hash_hex(&pairs);

        let fingerprint = canonical_hash_hex(&FingerprintInput {
            node_count,
            connection_count,
            schema_version: NETWORK_SCHEMA_VERSION.to_string(),
            node_name_hash: node_name_hash.clone(),
            connection_hash: connection_hash.clone(),
        });

        Self {
            fingerprint,
            node_count,
            connection_count,
            schema_version: NETWORK_SCHEMA_VERSION.to_string(),
            node_name_hash,
            connection_hash,
        }
    }

    /// Verify that this fingerprint still matches the given snapshot.
    pub fn verify(&self, networks: &ChainNetworks) -> bool {
        self.fingerprint == Self::compute(networks).fingerprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChainNode, Connection};

    fn sample() -> ChainNetworks {
        ChainNetworks::new(
            vec![ChainNode::new("a"), ChainNode::new("b")],
            vec![Connection::new("a", "b")],
        )
    }

    #[test]
    fn test_fingerprint_determinism() {
        let networks = sample();
        let f1 = NetworkFingerprint::compute(&networks);
        let f2 = NetworkFingerprint::compute(&networks);
        assert_eq!(f1, f2);
        assert_eq!(f1.node_count, 2);
        assert_eq!(f1.connection_count, 1);
    }

    #[test]
    fn test_fingerprint_order_independence() {
        let forward = ChainNetworks::new(
            vec![ChainNode::new("a"), ChainNode::new("b")],
            vec![Connection::new("a", "b"), Connection::new("b", "c")],
        );
        let reversed = ChainNetworks::new(
            vec![ChainNode::new("b"), ChainNode::new("a")],
            vec![Connection::new("b", "c"), Connection::new("a", "b")],
        );

        assert_eq!(
            NetworkFingerprint::compute(&forward).fingerprint,
            NetworkFingerprint::compute(&reversed).fingerprint
        );
    }

    #[test]
    fn test_fingerprint_differs_on_change() {
        let base = NetworkFingerprint::compute(&sample());

        let mut grown = sample();
        grown.connections.push(Connection::new("b", "c"));
        let changed = NetworkFingerprint::compute(&grown);

        assert_ne!(base.fingerprint, changed.fingerprint);
    }

    #[test]
    fn test_fingerprint_verify() {
        let networks = sample();
        let fingerprint = NetworkFingerprint::compute(&networks);
        assert!(fingerprint.verify(&networks));

        let mut modified = networks;
        modified.nodes.push(ChainNode::new("c"));
        assert!(!fingerprint.verify(&modified));
    }
}
