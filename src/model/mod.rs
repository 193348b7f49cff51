//! Core data model types for txn_merkle

mod hash;

pub use hash::{hash_hex, Hash, HASH_LEN, HEX_LEN};
