//! # txn_merkle
//!
//! A binary merkle tree over an ordered list of transactions.
//!
//! The tree commits to the whole list with a single SHA-256 root, and a
//! candidate list can be checked against a previously computed root by
//! rebuilding the tree from scratch.
//!
//! ## Core Concepts
//!
//! - **Tree**: `2N - 1` nodes in a fixed heap-indexed shape, leaves filled
//!   in-order from the last transaction backwards
//! - **Root**: each internal node hashes the hex text of its two children
//! - **Verification**: whole-list recomputation and exact root comparison
//!
//! ## Example
//!
//! ```
//! use txn_merkle::{verify, MerkleTree};
//!
//! let txns = ["txn1", "txn2", "txn3", "txn4"];
//! let mut tree = MerkleTree::from_transactions(&txns)?;
//! tree.compute_root();
//!
//! assert!(verify(&tree.root_hex(), &txns)?);
//! assert!(!verify(&tree.root_hex(), &["txn1", "txn2", "txn3", "TAMPERED"])?);
//! # Ok::<(), txn_merkle::Error>(())
//! ```

pub mod model;
pub mod ops;
pub mod transactions;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use model::{hash_hex, Hash};
pub use ops::{check, verify, Verification};
pub use transactions::load_transactions;
pub use tree::{merkle_root, MerkleTree, Node, NodeData};
