//! Operations built on top of the tree: verification

mod verify;

pub use verify::{check, verify, Verification};
