//! Snapshot and update payload types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::connection::Connection;
use super::node::{ChainNode, NodeName};

/// Error raised when an incoming payload is malformed.
///
/// The pure reconciliation transitions assume these conditions were checked
/// at the dispatch boundary; they never raise errors themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    /// A node entry carries an empty name and cannot be keyed.
    #[error("node entry with empty name")]
    EmptyNodeName,
    /// Two node entries in the same payload share a name.
    #[error("duplicate node name in payload: {0}")]
    DuplicateNodeName(NodeName),
    /// The same connection appears twice in the same list.
    #[error("duplicate connection in payload: {} <-> {}", .0.node_a, .0.node_b)]
    DuplicateConnection(Connection),
}

fn check_unique_names(nodes: &[ChainNode]) -> Result<(), UpdateError> {
    let mut seen: HashSet<&NodeName> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if node.name.is_empty() {
            return Err(UpdateError::EmptyNodeName);
        }
        if !seen.insert(&node.name) {
            return Err(UpdateError::DuplicateNodeName(node.name.clone()));
        }
    }
    Ok(())
}

fn check_unique_connections(connections: &[Connection]) -> Result<(), UpdateError> {
    let mut seen: HashSet<&Connection> = HashSet::with_capacity(connections.len());
    for connection in connections {
        if !seen.insert(connection) {
            return Err(UpdateError::DuplicateConnection(connection.clone()));
        }
    }
    Ok(())
}

/// The complete chain network graph at a point in time.
///
/// Snapshots are immutable values: every transition produces a fresh one and
/// never mutates its inputs. Node names are unique within `nodes`, and
/// `connections` holds no structural duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainNetworks {
    /// All known nodes, in first-seen order.
    pub nodes: Vec<ChainNode>,
    /// All known connections, append-only order.
    pub connections: Vec<Connection>,
}

impl ChainNetworks {
    /// Create a snapshot from parts.
    pub fn new(nodes: Vec<ChainNode>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    /// Look up a node by name.
    pub fn node(&self, name: &NodeName) -> Option<&ChainNode> {
        self.nodes.iter().find(|n| &n.name == name)
    }

    /// Whether a node with this name exists.
    pub fn contains(&self, name: &NodeName) -> bool {
        self.node(name).is_some()
    }

    /// Check the snapshot invariants: unique non-empty node names, no
    /// duplicate connections.
    pub fn validate(&self) -> Result<(), UpdateError> {
        check_unique_names(&self.nodes)?;
        check_unique_connections(&self.connections)
    }
}

/// A partial delta against the current snapshot.
///
/// Wire shape is camelCase JSON; the connection lists may be absent, which
/// deserializes to `None` and means "no change".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkUpdate {
    /// New nodes and new field values for existing nodes.
    #[serde(default)]
    pub nodes: Vec<ChainNode>,
    /// Connections to append.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_added: Option<Vec<Connection>>,
    /// Connections to drop, matched by structural equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_removed: Option<Vec<Connection>>,
}

impl NetworkUpdate {
    /// Update carrying only node data.
    pub fn nodes_only(nodes: Vec<ChainNode>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    /// Check that the update can be keyed and applied unambiguously:
    /// non-empty unique node names, no duplicates within either connection
    /// list.
    pub fn validate(&self) -> Result<(), UpdateError> {
        check_unique_names(&self.nodes)?;
        if let Some(added) = &self.connections_added {
            check_unique_connections(added)?;
        }
        if let Some(removed) = &self.connections_removed {
            check_unique_connections(removed)?;
        }
        Ok(())
    }
}
