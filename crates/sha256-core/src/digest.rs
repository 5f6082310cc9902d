// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Final digest value and its renderings.

use alloc::string::String;
use core::fmt;

use subtle::ConstantTimeEq;

use crate::consts::{DIGEST_LEN, DIGEST_WORDS, HEX_LEN};
use crate::error::FormatError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// SHA-256 digest: a snapshot of H(N) after the final block.
///
/// Immutable once produced. Renders as 64 lowercase hex characters,
/// `h0 || h1 || .. || h7`, each word as 8 digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    words: [u32; DIGEST_WORDS],
}

impl Digest {
    /// Build a digest from the eight state words
    pub const fn from_words(words: [u32; DIGEST_WORDS]) -> Self {
        Self { words }
    }

    /// Build a digest from its 32-byte big-endian encoding
    pub fn from_bytes(bytes: &[u8; DIGEST_LEN]) -> Self {
        let mut words = [0u32; DIGEST_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// The eight words h0..h7
    pub const fn words(&self) -> &[u32; DIGEST_WORDS] {
        &self.words
    }

    /// Word `hi`, or `None` when `i >= 8`
    pub fn word(&self, i: usize) -> Option<u32> {
        self.words.get(i).copied()
    }

    /// 32-byte big-endian encoding
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Write the lowercase hex rendering into `out` without allocating.
    pub fn encode_hex(&self, out: &mut [u8; HEX_LEN]) {
        for (pair, byte) in out.chunks_exact_mut(2).zip(self.to_bytes()) {
            pair[0] = HEX_DIGITS[usize::from(byte >> 4)];
            pair[1] = HEX_DIGITS[usize::from(byte & 0x0f)];
        }
    }

    /// Lowercase hex string of exactly 64 characters.
    ///
    /// # Errors
    ///
    /// [`FormatError::Allocation`] if the string cannot be allocated.
    pub fn to_hex(&self) -> Result<String, FormatError> {
        let mut hex = [0u8; HEX_LEN];
        self.encode_hex(&mut hex);

        let mut out = String::new();
        out.try_reserve_exact(HEX_LEN)
            .map_err(|_| FormatError::Allocation)?;

        // HEX_DIGITS is ASCII
        out.extend(hex.iter().map(|&b| char::from(b)));

        Ok(out)
    }

    /// Constant-time equality, for comparing against an expected digest.
    pub fn ct_eq(&self, other: &Digest) -> bool {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..]).into()
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
