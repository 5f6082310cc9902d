// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Parallel hashing of independent messages.
//!
//! Each worker owns one [`HashState`] and reuses it (reset per message);
//! nothing is shared between workers except the constant tables.

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use sha256_core::{Digest, HashError, HashState, hash_into};

/// Worker count when none is configured.
pub fn default_jobs() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Hash every message, using up to `jobs` threads.
///
/// Results are returned in input order.
pub fn hash_all(messages: &[Vec<u8>], jobs: NonZeroUsize) -> Vec<Result<Digest, HashError>> {
    if messages.is_empty() {
        return Vec::new();
    }

    let workers = jobs.get().min(messages.len());
    let chunk_len = messages.len().div_ceil(workers);

    tracing::debug!(messages = messages.len(), workers, chunk_len, "hashing batch");

    if workers == 1 {
        return hash_chunk(messages);
    }

    thread::scope(|s| {
        let handles: Vec<_> = messages
            .chunks(chunk_len)
            .map(|chunk| s.spawn(move || hash_chunk(chunk)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            })
            .collect()
    })
}

fn hash_chunk(chunk: &[Vec<u8>]) -> Vec<Result<Digest, HashError>> {
    let mut state = HashState::new();
    chunk
        .iter()
        .map(|message| hash_into(&mut state, message))
        .collect()
}
