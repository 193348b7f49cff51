//! Tree node types

use crate::model::Hash;
use std::fmt;

/// Payload carried by a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// Positional index assigned at shape construction, before any hashing
    Placeholder(usize),
    /// A leaf's hashed transaction or an internal node's combined hash
    Digest(Hash),
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeData::Placeholder(position) => write!(f, "{position}"),
            NodeData::Digest(hash) => write!(f, "{hash}"),
        }
    }
}

/// A node in the merkle tree arena
///
/// Children are indices into the owning tree's node storage. A node is
/// either a leaf (no children) or full (two children); the builder never
/// produces a node with a single child.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Node {
    /// Create a childless node holding its positional placeholder
    pub fn placeholder(position: usize) -> Self {
        Node {
            data: NodeData::Placeholder(position),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// The node's digest, if it has been hashed
    pub fn digest(&self) -> Option<Hash> {
        match self.data {
            NodeData::Digest(hash) => Some(hash),
            NodeData::Placeholder(_) => None,
        }
    }
}
