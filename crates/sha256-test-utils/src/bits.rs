// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Number of differing bits between two equally sized byte strings.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len(), "bit_distance length mismatch");
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Returns a copy of `bytes` with bit `bit` inverted (bit 0 = LSB of byte 0).
///
/// # Panics
///
/// Panics if `bit` is out of range.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}
