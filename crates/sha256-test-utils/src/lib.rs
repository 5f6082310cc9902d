// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for the sha256 crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod bits;
mod hex;
mod permutations;
mod vectors;

pub use bits::{bit_distance, flip_bit};
pub use hex::hex_to_bytes;
pub use permutations::{index_permutations, permuted};
pub use vectors::{KNOWN_ANSWERS, KnownAnswer, million_a};
