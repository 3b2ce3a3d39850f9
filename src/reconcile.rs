//! The reconciliation transitions.
//!
//! Two pure state transitions over [`ChainNetworks`] snapshots:
//!
//! - [`replace`]: install a full snapshot, discarding prior state.
//! - [`merge`]: fold a partial [`NetworkUpdate`] into the current snapshot.
//!
//! Both return newly allocated values and never mutate their inputs. The
//! closed [`NetworkAction`] union plus [`apply`] is the dispatch surface the
//! state container drives.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::merge::{merge_objects, ArrayMergePolicy};
use crate::types::{ChainNetworks, ChainNode, Connection, NetworkUpdate};

/// Snapshot holder with an explicit unset initial state.
///
/// `None` means no full snapshot has arrived yet; partial updates are
/// meaningless in that state and leave it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainNetworksState {
    /// The current snapshot, once loaded.
    pub chain_networks: Option<ChainNetworks>,
}

impl ChainNetworksState {
    /// The unset initial state.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Whether a snapshot has been installed.
    pub fn is_loaded(&self) -> bool {
        self.chain_networks.is_some()
    }
}

/// The two signals this module consumes.
///
/// Wire shape matches the upstream dispatcher: a `type` tag with the payload
/// under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NetworkAction {
    /// Install a full snapshot.
    SetChainNetworks(ChainNetworks),
    /// Fold a partial update into the current snapshot.
    UpdateChainNetworks(NetworkUpdate),
}

/// Install a full snapshot. Total overwrite; prior state is irrelevant.
pub fn replace(payload: &ChainNetworks) -> ChainNetworks {
    payload.clone()
}

/// Fold `update` into `current`, producing a new snapshot.
///
/// Nodes named in the update that already exist get a field-level merge with
/// the update winning on conflict and array fields replaced wholesale; nodes
/// new to the graph are appended after all current nodes. Connection removal
/// is applied strictly after addition, so adding and removing the same value
/// in one update nets to absent.
pub fn merge(current: &ChainNetworks, update: &NetworkUpdate) -> ChainNetworks {
    // Update entries whose name is absent from current are brand-new nodes.
    let new_nodes: Vec<ChainNode> = update
        .nodes
        .iter()
        .filter(|node| !current.contains(&node.name))
        .cloned()
        .collect();

    // Existing nodes keep their relative order; matched ones merge fields.
    let mut nodes: Vec<ChainNode> = current
        .nodes
        .iter()
        .map(|node| {
            match update.nodes.iter().find(|entry| entry.name == node.name) {
                Some(entry) => ChainNode {
                    name: node.name.clone(),
                    fields: merge_objects(&node.fields, &entry.fields, ArrayMergePolicy::Overwrite),
                },
                None => node.clone(),
            }
        })
        .collect();
    nodes.extend(new_nodes);

    // Additions first, removals strictly after; the clone keeps the result
    // independent of `current` even when both lists are absent.
    let mut connections = current.connections.clone();
    if let Some(added) = update.connections_added.as_deref() {
        connections.extend(added.iter().cloned());
    }
    if let Some(removed) = update.connections_removed.as_deref() {
        if !removed.is_empty() {
            let removed: HashSet<&Connection> = removed.iter().collect();
            connections.retain(|connection| !removed.contains(connection));
        }
    }

    ChainNetworks { nodes, connections }
}

/// Apply an action to the state, returning the next state.
pub fn apply(state: &ChainNetworksState, action: &NetworkAction) -> ChainNetworksState {
    match action {
        NetworkAction::SetChainNetworks(payload) => {
            tracing::debug!(
                nodes = payload.nodes.len(),
                connections = payload.connections.len(),
                "installing full snapshot"
            );
            ChainNetworksState {
                chain_networks: Some(replace(payload)),
            }
        }
        NetworkAction::UpdateChainNetworks(update) => match &state.chain_networks {
            Some(current) => {
                let next = merge(current, update);
                tracing::debug!(
                    nodes = next.nodes.len(),
                    connections = next.connections.len(),
                    "merged partial update"
                );
                ChainNetworksState {
                    chain_networks: Some(next),
                }
            }
            // Nothing to merge into before the first full snapshot.
            None => state.clone(),
        },
    }
}
