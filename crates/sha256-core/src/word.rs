// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit SHA-256 word with modulo 2^32 arithmetic.
//!
//! Addition always wraps; nothing in the schedule or compression stages can
//! trap on overflow. Big-endian decoding and encoding live here so the rest
//! of the pipeline only ever sees normalized words.

use core::ops::{Add, AddAssign, BitAnd, BitXor, Not};

use zeroize::Zeroize;

/// 32-bit word with wrapping addition.
///
/// `#[repr(transparent)]` keeps the layout of a plain `u32`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Word32(u32);

impl Word32 {
    /// Create new Word32 with given value
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create zero Word32
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw value
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Decode four bytes, most significant first
    #[inline(always)]
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Encode as four bytes, most significant first
    #[inline(always)]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// ROTR^n(x): circular right rotation
    #[inline(always)]
    pub const fn rotr(self, n: u32) -> Self {
        Self(self.0.rotate_right(n))
    }

    /// SHR^n(x): logical right shift
    #[inline(always)]
    pub const fn shr(self, n: u32) -> Self {
        Self(self.0 >> n)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-256 functions per FIPS 180-4 Section 4.1.2
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    pub fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    #[inline(always)]
    pub fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (x & z) ^ (y & z)
    }

    /// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
    #[inline(always)]
    pub fn bsig0(self) -> Self {
        self.rotr(2) ^ self.rotr(13) ^ self.rotr(22)
    }

    /// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
    #[inline(always)]
    pub fn bsig1(self) -> Self {
        self.rotr(6) ^ self.rotr(11) ^ self.rotr(25)
    }

    /// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
    #[inline(always)]
    pub fn ssig0(self) -> Self {
        self.rotr(7) ^ self.rotr(18) ^ self.shr(3)
    }

    /// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
    #[inline(always)]
    pub fn ssig1(self) -> Self {
        self.rotr(17) ^ self.rotr(19) ^ self.shr(10)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════════════

impl Add for Word32 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Add<u32> for Word32 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: u32) -> Self {
        Self(self.0.wrapping_add(rhs))
    }
}

impl AddAssign for Word32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl BitAnd for Word32 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for Word32 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Word32 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl From<u32> for Word32 {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Word32> for u32 {
    fn from(word: Word32) -> Self {
        word.0
    }
}

impl core::fmt::Debug for Word32 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Word32({:#010x})", self.0)
    }
}
