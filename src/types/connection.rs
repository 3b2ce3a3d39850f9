//! Connection types for the chain network graph.

use serde::{Deserialize, Serialize};
use super::node::NodeName;

/// An edge between two nodes in the chain network.
///
/// Connections have no identity of their own; two connections are the same
/// connection exactly when they are structurally equal. `Eq + Hash` make
/// set-difference by value possible during reconciliation, and `Ord` gives a
/// canonical (node_a, node_b) ordering for fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// One endpoint.
    pub node_a: NodeName,
    /// The other endpoint.
    pub node_b: NodeName,
}

impl Connection {
    /// Create a new connection.
    pub fn new(node_a: impl Into<NodeName>, node_b: impl Into<NodeName>) -> Self {
        Self {
            node_a: node_a.into(),
            node_b: node_b.into(),
        }
    }
}

impl PartialOrd for Connection {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Connection {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.node_a.cmp(&other.node_a) {
            std::cmp::Ordering::Equal => self.node_b.cmp(&other.node_b),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let c1 = Connection::new("a", "b");
        let c2 = Connection::new("a", "b");
        let c3 = Connection::new("b", "a");

        assert_eq!(c1, c2);
        // Direction matters for structural equality.
        assert_ne!(c1, c3);
    }

    #[test]
    fn test_canonical_ordering() {
        let c1 = Connection::new("a", "b");
        let c2 = Connection::new("a", "c");
        let c3 = Connection::new("b", "a");

        assert!(c1 < c2);
        assert!(c2 < c3);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let c = Connection::new("left", "right");
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "nodeA": "left", "nodeB": "right" })
        );
    }
}
