//! Binary merkle tree over ordered transactions
//!
//! - Leaves hold the SHA-256 of one transaction
//! - Each internal node holds the hash of its children's hex digests
//! - The root digest commits to the whole transaction list

mod node;
#[allow(clippy::module_inception)]
mod tree;

pub use node::{Node, NodeData};
pub use tree::{merkle_root, MerkleTree};
