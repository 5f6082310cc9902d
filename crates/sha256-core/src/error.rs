// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that abort a hash computation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// The message bit-length (`len * 8`) does not fit in the 64-bit length field
    #[error("message of {len} bytes exceeds the 64-bit bit-length counter")]
    InvalidLength {
        /// Byte length of the rejected message
        len: usize,
    },

    /// The padded block buffer could not be allocated
    #[error("failed to allocate padded block buffer")]
    Allocation,
}

/// Errors that occur while rendering a digest.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The hex string could not be allocated
    #[error("failed to allocate digest string")]
    Allocation,
}
