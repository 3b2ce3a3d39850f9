//! Node types for the chain network graph.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Unique identifier for a node in the chain network.
///
/// Wraps the node's display name and implements `Ord` for deterministic
/// ordering in hashed and sorted contexts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeName(String);

impl NodeName {
    /// Create a new NodeName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty. Empty names are rejected by validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Reported run state of a chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Process is starting up.
    Starting,
    /// Running normally.
    Run,
    /// Stopped.
    Stop,
    /// Binary or config update in progress.
    Updating,
    /// Errored.
    Error,
    /// Reported by an agent the hub does not recognize.
    UFO,
}

impl NodeStatus {
    /// Parse status from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Starting" => Some(Self::Starting),
            "Run" => Some(Self::Run),
            "Stop" => Some(Self::Stop),
            "Updating" => Some(Self::Updating),
            "Error" => Some(Self::Error),
            "UFO" => Some(Self::UFO),
            _ => None,
        }
    }
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self::Stop
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => write!(f, "Starting"),
            Self::Run => write!(f, "Run"),
            Self::Stop => write!(f, "Stop"),
            Self::Updating => write!(f, "Updating"),
            Self::Error => write!(f, "Error"),
            Self::UFO => write!(f, "UFO"),
        }
    }
}

/// A node in the chain network.
///
/// Identified by `name`; everything else the upstream agent reports about the
/// node (status, version, best block, hardware usage, ...) lands in `fields`
/// as-is. The reconciler merges those fields without interpreting them, so
/// the schema can evolve upstream without touching this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainNode {
    /// Unique node name.
    pub name: NodeName,
    /// Remaining payload fields, preserved verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ChainNode {
    /// Create a node with no extra fields.
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Typed view of the `status` field, when present and well-formed.
    pub fn status(&self) -> Option<NodeStatus> {
        self.get("status")
            .and_then(Value::as_str)
            .and_then(NodeStatus::from_str)
    }
}
