// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest engine per FIPS 180-4.
//!
//! The computation is a single forward pipeline:
//!
//! 1. [`framer`] pads the message to a multiple of 64 bytes.
//! 2. [`schedule`] expands each block into 64 words.
//! 3. [`state`] folds each schedule into the running hash state.
//! 4. [`digest`] snapshots the final state and renders it.
//!
//! Every computation owns its own [`HashState`]; only the round constants
//! are shared. Scratch memory (padded buffer, schedule, state) is zeroized
//! when it goes out of scope.
//!
//! # Example
//!
//! ```
//! use sha256_core::hash;
//!
//! let digest = hash(b"abc").expect("Failed to hash(..)");
//! assert_eq!(
//!     digest.to_hex().expect("Failed to to_hex()"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod consts;
pub mod digest;
pub mod framer;
pub mod schedule;
pub mod state;
pub mod word;

mod error;
mod hash;

pub use digest::Digest;
pub use error::{FormatError, HashError};
pub use framer::{PaddedMessage, pad, padding_len};
pub use hash::{hash, hash_into};
pub use schedule::MessageSchedule;
pub use state::HashState;
pub use word::Word32;
