// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `sha256` command implementation.

use std::ffi::OsString;
use std::io::Write;
use std::num::NonZeroUsize;

use anyhow::{Context, Result, ensure};
use clap::Args;

use crate::EXIT_SUCCESS;
use crate::batch::{default_jobs, hash_all};
use crate::input::{InputMode, classify};
use crate::report;

/// Arguments for hashing.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Messages to hash, or absolute paths of files to hash.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<OsString>,

    /// How to interpret INPUT arguments.
    #[arg(long, value_enum, env = "SHA256_MODE", default_value_t = InputMode::Auto)]
    pub mode: InputMode,

    /// Worker threads for several inputs (default: available parallelism).
    #[arg(short, long, env = "SHA256_JOBS")]
    pub jobs: Option<NonZeroUsize>,
}

/// Load, hash and print every input. Returns the process exit code.
pub fn run_hash(args: &HashArgs, out: &mut impl Write) -> Result<u8> {
    ensure!(!args.inputs.is_empty(), "no input given");

    let mut labels = Vec::with_capacity(args.inputs.len());
    let mut messages = Vec::with_capacity(args.inputs.len());

    for arg in &args.inputs {
        let source = classify(arg, args.mode);
        let label = source.label();
        tracing::debug!(input = %label, mode = ?args.mode, "loading input");

        messages.push(source.load()?);
        labels.push(label);
    }

    let jobs = args.jobs.unwrap_or_else(default_jobs);
    let results = hash_all(&messages, jobs);
    let labelled = labels.len() > 1;

    for (label, result) in labels.iter().zip(results) {
        let digest = result.with_context(|| format!("failed to hash {label}"))?;
        tracing::info!(input = %label, %digest, "hashed");

        let line = report::line(labelled.then_some(label.as_str()), &digest)
            .context("failed to render digest")?;
        writeln!(out, "{line}").context("failed to write output")?;
    }

    Ok(EXIT_SUCCESS)
}
