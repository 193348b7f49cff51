//! Merkle tree over an ordered transaction list

use super::{Node, NodeData};
use crate::model::Hash;
use crate::{Error, Result};
use tracing::debug;

/// A binary merkle tree stored as a flat arena
///
/// The shape is fixed by heap indexing: for `N` transactions there are
/// `2N - 1` nodes, node `i` has children `2i + 1` and `2i + 2` when those
/// positions exist, and node 0 is the root. Every internal node is full.
#[derive(Clone, Debug, Default)]
pub struct MerkleTree {
    nodes: Vec<Node>,
    root: Option<Hash>,
}

impl MerkleTree {
    /// Create an empty tree with no root
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from an ordered, non-empty list of transactions
    ///
    /// Leaves are visited in-order and receive the transactions from the
    /// end of the list backwards: the last transaction lands on the first
    /// in-order leaf. The caller's slice is left untouched.
    pub fn from_transactions<T: AsRef<[u8]>>(transactions: &[T]) -> Result<Self> {
        if transactions.is_empty() {
            return Err(Error::EmptyInput);
        }

        let node_count = 2 * transactions.len() - 1;
        let nodes = (0..node_count)
            .map(|position| {
                let mut node = Node::placeholder(position);
                node.left = Some(2 * position + 1).filter(|&c| c < node_count);
                node.right = Some(2 * position + 2).filter(|&c| c < node_count);
                node
            })
            .collect();

        let mut tree = MerkleTree { nodes, root: None };
        let mut cursor = transactions.len();
        tree.fill_leaves(0, transactions, &mut cursor);
        debug_assert_eq!(cursor, 0, "every transaction must land on a leaf");

        debug!(
            transactions = transactions.len(),
            nodes = node_count,
            "built merkle tree"
        );
        Ok(tree)
    }

    /// Resolve every internal node bottom-up and record the root digest
    ///
    /// Returns `None` without doing anything when the tree has no nodes.
    pub fn compute_root(&mut self) -> Option<Hash> {
        if self.nodes.is_empty() {
            return None;
        }

        let root = self.resolve(0);
        self.root = Some(root);
        debug!(root = %root, "computed merkle root");
        Some(root)
    }

    /// The root digest, if it has been computed
    pub fn root(&self) -> Option<Hash> {
        self.root
    }

    /// The root digest as hex, or an empty string if not yet computed
    pub fn root_hex(&self) -> String {
        self.root.map(|h| h.to_hex()).unwrap_or_default()
    }

    /// Check a candidate transaction list against this tree's root
    pub fn verify_transactions<T: AsRef<[u8]>>(&self, candidates: &[T]) -> Result<bool> {
        crate::ops::verify(&self.root_hex(), candidates)
    }

    /// Total number of nodes (`2N - 1` for `N` transactions)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of levels, counting the root level; zero for an empty tree
    pub fn depth(&self) -> usize {
        (usize::BITS - self.nodes.len().leading_zeros()) as usize
    }

    /// Leaf digests in in-order traversal order
    pub fn leaves(&self) -> Vec<Hash> {
        let mut out = Vec::new();
        self.walk_inorder(0, &mut |node: &Node| {
            if node.is_leaf() {
                out.extend(node.digest());
            }
        });
        out
    }

    /// Every node's payload in in-order traversal order
    ///
    /// Internal nodes show their positional placeholder until the root has
    /// been computed.
    pub fn inorder(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_inorder(0, &mut |node: &Node| out.push(node.data.to_string()));
        out
    }

    /// Read-only access to the arena
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    // === Internal helpers ===

    fn fill_leaves<T: AsRef<[u8]>>(
        &mut self,
        index: usize,
        transactions: &[T],
        cursor: &mut usize,
    ) {
        let (left, right) = (self.nodes[index].left, self.nodes[index].right);

        if let Some(left) = left {
            self.fill_leaves(left, transactions, cursor);
        }

        if self.nodes[index].is_leaf() {
            *cursor -= 1;
            let leaf = Hash::digest(transactions[*cursor].as_ref());
            self.nodes[index].data = NodeData::Digest(leaf);
        }

        if let Some(right) = right {
            self.fill_leaves(right, transactions, cursor);
        }
    }

    fn resolve(&mut self, index: usize) -> Hash {
        match (self.nodes[index].left, self.nodes[index].right) {
            (Some(left), Some(right)) => {
                let left = self.resolve(left);
                let right = self.resolve(right);
                let hash = Hash::combine(&left, &right);
                self.nodes[index].data = NodeData::Digest(hash);
                hash
            }
            _ => self.nodes[index]
                .digest()
                .expect("leaves are hashed when the tree is built"),
        }
    }

    fn walk_inorder<'a>(&'a self, index: usize, visit: &mut impl FnMut(&'a Node)) {
        let Some(node) = self.nodes.get(index) else {
            return;
        };
        if let Some(left) = node.left {
            self.walk_inorder(left, visit);
        }
        visit(node);
        if let Some(right) = node.right {
            self.walk_inorder(right, visit);
        }
    }
}

/// Build a tree from `transactions` and return its root digest
pub fn merkle_root<T: AsRef<[u8]>>(transactions: &[T]) -> Result<Hash> {
    let mut tree = MerkleTree::from_transactions(transactions)?;
    tree.compute_root().ok_or(Error::EmptyInput)
}
