//! Known-answer roots for the public API
//!
//! Expected values are SHA-256 roots for the heap-shaped tree with leaves
//! filled in-order from the last transaction backwards.

use txn_merkle::{hash_hex, merkle_root, verify, Hash, MerkleTree};

fn root_hex(txns: &[&str]) -> String {
    merkle_root(txns).unwrap().to_hex()
}

#[test]
fn test_known_roots() {
    let cases: [(&[&str], &str); 5] = [
        (
            &["only"],
            "f905b19542ed08c9a9c26543cca32e5711d207dcffb81b4cdb44ce0b989431c9",
        ),
        (
            &["a", "b"],
            "ab19ec537f09499b26f0f62eed7aefad46ab9f498e06a7328ce8e8ef90da6d86",
        ),
        (
            &["txn1", "txn2", "txn3"],
            "e2c2716835c009da14fe7b90243549e25dbd3b6afa783fc843bd8bbfe8fe18b9",
        ),
        (
            &["txn1", "txn2", "txn3", "txn4"],
            "ff6cde7bae148a1277d8bfc1474bed15fd6a642134fde7d1ff94a650419258c0",
        ),
        (
            &["txn1", "txn2", "txn3", "txn4", "txn5"],
            "8fd5150d14b581aa107282a336361f3dfaa258dc6eb2fe8e761b600a546b5c56",
        ),
    ];

    for (txns, expected) in cases {
        assert_eq!(root_hex(txns), expected, "root of {:?}", txns);
    }
}

#[test]
fn test_two_leaves_combine_in_reverse() {
    let expected = hash_hex(format!("{}{}", hash_hex("b"), hash_hex("a")));
    assert_eq!(root_hex(&["a", "b"]), expected);
}

#[test]
fn test_every_digest_is_lowercase_hex() {
    let txns: Vec<String> = (0..9).map(|i| format!("record-{i}")).collect();
    let mut tree = MerkleTree::from_transactions(&txns).unwrap();
    tree.compute_root();

    for payload in tree.inorder() {
        assert_eq!(payload.len(), 64);
        assert!(payload.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }
}

#[test]
fn test_soundness_and_completeness() {
    let lists: [&[&str]; 4] = [
        &["x"],
        &["x", "y"],
        &["x", "y", "z"],
        &["p", "q", "r", "s", "t", "u", "v"],
    ];

    for list in lists {
        let root = root_hex(list);
        assert!(verify(&root, list).unwrap());
        for other in lists.iter().copied().filter(|o| *o != list) {
            assert!(!verify(&root, other).unwrap(), "{:?} vs {:?}", list, other);
        }
    }
}

#[test]
fn test_root_parses_back_into_hash() {
    let root = merkle_root(&["txn1", "txn2", "txn3", "txn4"]).unwrap();
    assert_eq!(Hash::from_hex(&root.to_hex()).unwrap(), root);
}
