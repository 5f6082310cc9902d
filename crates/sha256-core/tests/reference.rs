// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cross-checks against the RustCrypto `sha2` implementation.

use proptest::prelude::*;
use sha2::{Digest as _, Sha256};

use sha256_core::{HashState, hash, hash_into};

fn reference(message: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(message));
    out
}

#[test]
fn test_every_length_up_to_five_blocks() {
    let message: Vec<u8> = (0..=320u32).map(|i| (i * 7 + 3) as u8).collect();

    for len in 0..=message.len() {
        let digest = hash(&message[..len]).expect("Failed to hash(..)");
        assert_eq!(
            digest.to_bytes(),
            reference(&message[..len]),
            "mismatch at length {len}"
        );
    }
}

#[test]
fn test_boundary_lengths_55_and_56() {
    let message = [0x5au8; 56];

    let d55 = hash(&message[..55]).expect("Failed to hash(..)");
    let d56 = hash(&message).expect("Failed to hash(..)");

    assert_eq!(d55.to_bytes(), reference(&message[..55]));
    assert_eq!(d56.to_bytes(), reference(&message));
    assert_ne!(d55, d56);
}

#[test]
fn test_reused_state_matches_reference() {
    let mut state = HashState::new();

    for len in [0usize, 1, 63, 64, 65, 200] {
        let message = vec![len as u8; len];
        let digest = hash_into(&mut state, &message).expect("Failed to hash_into(..)");
        assert_eq!(digest.to_bytes(), reference(&message), "length {len}");
    }
}

proptest! {
    #[test]
    fn matches_reference_for_arbitrary_input(
        message in proptest::collection::vec(any::<u8>(), 0..=2048)
    ) {
        let digest = hash(&message).expect("Failed to hash(..)");

        prop_assert_eq!(digest.to_bytes(), reference(&message));
        prop_assert_eq!(
            digest.to_hex().expect("Failed to to_hex()"),
            format!("{:x}", Sha256::digest(&message))
        );
    }
}
