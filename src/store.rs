//! In-memory state container for the current snapshot.
//!
//! Owns the [`ChainNetworksState`] and serializes transitions: actions go
//! through [`NetworkStore::dispatch`] one at a time (`&mut self`), which
//! validates the payload and then applies the pure transition. Validation
//! failures leave the held state untouched.

use crate::reconcile::{apply, ChainNetworksState, NetworkAction};
use crate::types::{ChainNetworks, UpdateError};

/// Serializing container for the current chain network snapshot.
#[derive(Debug, Clone, Default)]
pub struct NetworkStore {
    state: ChainNetworksState,
}

impl NetworkStore {
    /// Create a store in the unset initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and apply an action.
    pub fn dispatch(&mut self, action: &NetworkAction) -> Result<(), UpdateError> {
        let validated = match action {
            NetworkAction::SetChainNetworks(payload) => payload.validate(),
            NetworkAction::UpdateChainNetworks(update) => update.validate(),
        };
        if let Err(err) = validated {
            tracing::warn!(error = %err, "rejected malformed payload");
            return Err(err);
        }

        self.state = apply(&self.state, action);
        Ok(())
    }

    /// The current snapshot, or `None` before the first full snapshot.
    pub fn current(&self) -> Option<&ChainNetworks> {
        self.state.chain_networks.as_ref()
    }

    /// The full held state.
    pub fn state(&self) -> &ChainNetworksState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChainNode, Connection, NetworkUpdate};

    #[test]
    fn test_store_starts_unset() {
        let store = NetworkStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_dispatch_set_then_update() {
        let mut store = NetworkStore::new();

        store
            .dispatch(&NetworkAction::SetChainNetworks(ChainNetworks::new(
                vec![ChainNode::new("a")],
                vec![],
            )))
            .unwrap();

        store
            .dispatch(&NetworkAction::UpdateChainNetworks(NetworkUpdate {
                nodes: vec![ChainNode::new("b")],
                connections_added: Some(vec![Connection::new("a", "b")]),
                connections_removed: None,
            }))
            .unwrap();

        let current = store.current().unwrap();
        assert_eq!(current.nodes.len(), 2);
        assert_eq!(current.connections, vec![Connection::new("a", "b")]);
    }

    #[test]
    fn test_dispatch_rejects_malformed_and_keeps_state() {
        let mut store = NetworkStore::new();
        store
            .dispatch(&NetworkAction::SetChainNetworks(ChainNetworks::new(
                vec![ChainNode::new("a")],
                vec![],
            )))
            .unwrap();
        let before = store.state().clone();

        let result = store.dispatch(&NetworkAction::UpdateChainNetworks(
            NetworkUpdate::nodes_only(vec![ChainNode::new("b"), ChainNode::new("b")]),
        ));

        assert!(result.is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_update_before_set_is_noop() {
        let mut store = NetworkStore::new();
        store
            .dispatch(&NetworkAction::UpdateChainNetworks(
                NetworkUpdate::nodes_only(vec![ChainNode::new("a")]),
            ))
            .unwrap();
        assert!(store.current().is_none());
    }
}
