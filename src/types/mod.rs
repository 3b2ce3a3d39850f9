//! Core types for the chain network reconciler.

pub mod node;
pub mod connection;
pub mod network;

pub use node::{ChainNode, NodeName, NodeStatus};
pub use connection::Connection;
pub use network::{ChainNetworks, NetworkUpdate, UpdateError};
