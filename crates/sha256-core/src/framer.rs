// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block framer: message padding per FIPS 180-4 Section 5.1.1.
//!
//! The padded message is `M || 0x80 || 0x00.. || BE64(len * 8)`, sized to the
//! smallest multiple of [`BLOCK_LEN`] that leaves room for the start byte and
//! the length field.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, MIN_PADDING_LEN, PAD_START};
use crate::error::HashError;

/// Message padded to a whole number of blocks.
///
/// Owns its buffer exclusively and zeroizes it on drop, including when a
/// computation is abandoned early.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl PaddedMessage {
    /// Total padded length in bytes (a positive multiple of 64)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even the empty message pads to one block
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of 64-byte blocks
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_LEN
    }

    /// Bit-length of the original message, as written to the length field
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Raw padded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Blocks in message order
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> + '_ {
        self.bytes
            .chunks_exact(BLOCK_LEN)
            .flat_map(|chunk| <&[u8; BLOCK_LEN]>::try_from(chunk))
    }
}

impl core::fmt::Debug for PaddedMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaddedMessage")
            .field("len", &self.len())
            .field("bit_len", &self.bit_len)
            .finish_non_exhaustive()
    }
}

/// Bit-length of a `len`-byte message, if it fits the 64-bit length field.
fn bit_len(len: usize) -> Result<u64, HashError> {
    u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(HashError::InvalidLength { len })
}

/// Number of padding bytes `P` appended to a `len`-byte message.
///
/// `P` is the smallest value with `(len + P) % 64 == 0` and `P >= 9`.
///
/// # Errors
///
/// [`HashError::InvalidLength`] if `len * 8` overflows `u64` or the padded
/// length overflows `usize`.
pub fn padding_len(len: usize) -> Result<usize, HashError> {
    bit_len(len)?;

    // Free bytes left in the last block once the mandatory 9 are placed
    let used = (len % BLOCK_LEN + MIN_PADDING_LEN) % BLOCK_LEN;
    let padding = MIN_PADDING_LEN + (BLOCK_LEN - used) % BLOCK_LEN;

    len.checked_add(padding)
        .map(|_| padding)
        .ok_or(HashError::InvalidLength { len })
}

/// Pad `message` into a fresh block buffer.
///
/// # Errors
///
/// - [`HashError::InvalidLength`] when the length cannot be encoded
/// - [`HashError::Allocation`] when the padded buffer cannot be reserved
pub fn pad(message: &[u8]) -> Result<PaddedMessage, HashError> {
    let len = message.len();
    let bit_len = bit_len(len)?;
    let total = len + padding_len(len)?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(total)
        .map_err(|_| HashError::Allocation)?;

    // Capacity is exact: none of the writes below reallocate
    bytes.extend_from_slice(message);
    bytes.push(PAD_START);
    bytes.resize(total - LENGTH_FIELD_LEN, 0);
    bytes.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(bytes.len() % BLOCK_LEN, 0);

    Ok(PaddedMessage { bytes, bit_len })
}
