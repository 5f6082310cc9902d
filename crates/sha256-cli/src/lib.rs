// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sha256-cli
//!
//! The `sha256` command: turns arguments into byte buffers, hashes them with
//! [`sha256_core`], and prints one `SHA-256: <hex>` line per input.
//!
//! ```bash
//! sha256 "abc"
//! sha256 /var/log/syslog
//! sha256 --mode text /not/a/file
//! ```
//!
//! ## Exit status
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | every input hashed |
//! | 1 | no input given (usage printed) |
//! | 2 | an input could not be read or hashed |

pub mod batch;
pub mod input;
pub mod report;
pub mod run;

#[cfg(test)]
mod tests;

/// Every input was hashed and printed.
pub const EXIT_SUCCESS: u8 = 0;

/// No input was given; usage was printed.
pub const EXIT_USAGE: u8 = 1;

/// An input could not be loaded or hashed.
pub const EXIT_FAILURE: u8 = 2;
