// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 running state and compression function per FIPS 180-4 Section 6.2.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, DIGEST_WORDS, H0, K256};
use crate::digest::Digest;
use crate::schedule::MessageSchedule;
use crate::word::Word32;

/// Running hash state H(i).
///
/// Owned by exactly one computation: not `Clone`, mutated only through
/// `&mut self`, zeroized on drop. Blocks must be folded in message order.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HashState {
    // Hash state H(i) per FIPS 180-4 Section 6.2.2
    h: [Word32; DIGEST_WORDS],
    blocks: u64,
}

impl HashState {
    /// Create new state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0.map(Word32::new),
            blocks: 0,
        }
    }

    /// Reset to H(0) for reuse by an unrelated computation
    pub fn reset(&mut self) {
        self.zeroize();
        self.h = H0.map(Word32::new);
    }

    /// Number of blocks folded in since the last reset
    pub fn blocks_absorbed(&self) -> u64 {
        self.blocks
    }

    /// Fold one block's schedule into the state (64 rounds, then H += wv).
    pub fn compress(&mut self, schedule: &MessageSchedule) {
        // Working variables a..h per FIPS 180-4 Section 6.2.2 step 2
        let mut wv = self.h;

        for (k, wt) in K256.iter().zip(schedule.words()) {
            let [a, b, c, d, e, f, g, h] = wv;

            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            let t1 = h + e.bsig1() + Word32::ch(e, f, g) + *k + *wt;

            // T2 = Σ0(a) + Maj(a,b,c)
            let t2 = a.bsig0() + Word32::maj(a, b, c);

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            wv = [t1 + t2, a, b, c, d + t1, e, f, g];
        }

        for (hi, vi) in self.h.iter_mut().zip(wv.iter()) {
            *hi += *vi;
        }
        wv.zeroize();

        self.blocks = self.blocks.wrapping_add(1);
    }

    /// Expand and compress one raw block.
    pub fn absorb_block(&mut self, block: &[u8; BLOCK_LEN]) {
        let schedule = MessageSchedule::expand(block);
        self.compress(&schedule);
    }

    /// Snapshot of the current state as a digest.
    ///
    /// The digest is an independent copy; later compressions do not affect it.
    pub fn digest(&self) -> Digest {
        Digest::from_words(self.h.map(Word32::get))
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for HashState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashState")
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}
