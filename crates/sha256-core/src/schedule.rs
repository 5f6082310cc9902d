// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};
use crate::word::Word32;

/// Message schedule W[0..63] for a single block.
///
/// Scoped to one block: it is rebuilt from scratch for every block and
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MessageSchedule {
    w: [Word32; SCHEDULE_LEN],
}

impl MessageSchedule {
    /// Expand one 64-byte block into 64 words.
    pub fn expand(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [Word32::zero(); SCHEDULE_LEN];

        // W[0..15] from block (big-endian)
        for (wt, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
            *wt = Word32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..SCHEDULE_LEN {
            w[t] = w[t - 2].ssig1() + w[t - 7] + w[t - 15].ssig0() + w[t - 16];
        }

        Self { w }
    }

    /// W[t], or `None` when `t >= 64`
    pub fn word(&self, t: usize) -> Option<u32> {
        self.w.get(t).map(|w| w.get())
    }

    pub(crate) fn words(&self) -> &[Word32; SCHEDULE_LEN] {
        &self.w
    }
}

impl core::fmt::Debug for MessageSchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED MessageSchedule]")
    }
}
