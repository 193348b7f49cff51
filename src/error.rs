//! Error types for txn_merkle

use thiserror::Error;

/// Result type alias for txn_merkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or verifying a merkle tree
///
/// A root mismatch during verification is not an error; it is reported as
/// `false` by the verifier.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot build a merkle tree from an empty transaction list")]
    EmptyInput,

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
