//! Whole-list verification against a previously computed root

use crate::model::Hash;
use crate::tree::merkle_root;
use crate::Result;
use serde::Serialize;
use tracing::{info, warn};

const VERIFIED_MESSAGE: &str = "Transactions verified successfully";
const TAMPERED_MESSAGE: &str = "Transactions have been tampered";

/// Outcome of checking a candidate list against an expected root
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// The root the caller supplied, exactly as given
    pub expected: String,
    /// The root recomputed from the candidate transactions
    pub actual: Hash,
    pub verified: bool,
}

impl Verification {
    pub fn message(&self) -> &'static str {
        if self.verified {
            VERIFIED_MESSAGE
        } else {
            TAMPERED_MESSAGE
        }
    }
}

/// Rebuild a tree from `candidates` and compare its root with `original_root`
///
/// Comparison is exact string equality against the lowercase hex root, so an
/// uppercase or otherwise reformatted root never matches. A mismatch is a
/// normal outcome, not an error; only an empty candidate list fails.
pub fn check<T: AsRef<[u8]>>(original_root: &str, candidates: &[T]) -> Result<Verification> {
    let actual = merkle_root(candidates)?;
    let verified = actual.to_hex() == original_root;

    let outcome = Verification {
        expected: original_root.to_string(),
        actual,
        verified,
    };
    if verified {
        info!(root = %actual, "{}", outcome.message());
    } else {
        warn!(expected = original_root, actual = %actual, "{}", outcome.message());
    }
    Ok(outcome)
}

/// Whether `candidates` reproduce `original_root`
pub fn verify<T: AsRef<[u8]>>(original_root: &str, candidates: &[T]) -> Result<bool> {
    Ok(check(original_root, candidates)?.verified)
}
