// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Output lines.

use sha256_core::{Digest, FormatError};

/// `SHA-256: <hex>`, or `SHA-256 (<label>): <hex>` when a label is given.
pub fn line(label: Option<&str>, digest: &Digest) -> Result<String, FormatError> {
    let hex = digest.to_hex()?;

    Ok(match label {
        None => format!("SHA-256: {hex}"),
        Some(label) => format!("SHA-256 ({label}): {hex}"),
    })
}
