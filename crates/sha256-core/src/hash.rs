// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot SHA-256: pad, then expand and compress every block in order.

use crate::digest::Digest;
use crate::error::HashError;
use crate::framer::pad;
use crate::state::HashState;

/// SHA-256 digest of `message`.
///
/// Pure and deterministic. All scratch memory is released (and zeroized)
/// before returning, on success and on error alike.
///
/// # Errors
///
/// - [`HashError::InvalidLength`] if `message.len() * 8` overflows `u64`
/// - [`HashError::Allocation`] if the padded buffer cannot be allocated
pub fn hash(message: &[u8]) -> Result<Digest, HashError> {
    let mut state = HashState::new();
    absorb(&mut state, message)
}

/// SHA-256 digest of `message` using a caller-owned state.
///
/// The state is reset to H(0) first, so it may be reused across unrelated
/// messages. On error the state is left reset.
pub fn hash_into(state: &mut HashState, message: &[u8]) -> Result<Digest, HashError> {
    state.reset();
    absorb(state, message)
}

fn absorb(state: &mut HashState, message: &[u8]) -> Result<Digest, HashError> {
    let padded = pad(message)?;

    for block in padded.blocks() {
        state.absorb_block(block);
    }

    debug_assert_eq!(state.blocks_absorbed(), padded.block_count() as u64);

    Ok(state.digest())
}
