// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input loading: decide whether an argument names a file or is the message
//! itself, and produce the exact bytes to hash.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

/// How command-line arguments are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Absolute paths are files; everything else is a literal message
    #[default]
    Auto,
    /// Every argument is a literal message
    Text,
    /// Every argument is a file path
    File,
}

/// Errors raised while loading an input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read
    #[error("error reading file: {}", path.display())]
    Read {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// A classified command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The argument bytes are the message
    Literal(Vec<u8>),
    /// The message is the content of this file
    File(PathBuf),
}

/// `true` for `/unix/style` and `C:\windows\style` absolute paths.
pub fn looks_like_path(arg: &[u8]) -> bool {
    match arg {
        [b'/', ..] => true,
        [_, b':', b'\\', ..] => true,
        _ => false,
    }
}

/// Classify one argument according to `mode`.
pub fn classify(arg: &OsStr, mode: InputMode) -> InputSource {
    let is_file = match mode {
        InputMode::Auto => looks_like_path(arg.as_encoded_bytes()),
        InputMode::Text => false,
        InputMode::File => true,
    };

    if is_file {
        InputSource::File(PathBuf::from(arg))
    } else {
        InputSource::Literal(arg.as_encoded_bytes().to_vec())
    }
}

impl InputSource {
    /// Human-readable name used in multi-input reports.
    pub fn label(&self) -> String {
        match self {
            InputSource::Literal(bytes) => format!("{:?}", String::from_utf8_lossy(bytes)),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Bytes to hash.
    ///
    /// Files are read in full: interior NUL bytes are kept and the length
    /// comes from the data actually read. An empty file is the empty message.
    pub fn load(self) -> Result<Vec<u8>, InputError> {
        match self {
            InputSource::Literal(bytes) => Ok(bytes),
            InputSource::File(path) => {
                let bytes = fs::read(&path).map_err(|source| InputError::Read {
                    path: path.clone(),
                    source,
                })?;

                if bytes.is_empty() {
                    tracing::warn!(path = %path.display(), "file is empty; hashing the empty message");
                } else {
                    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded file");
                }

                Ok(bytes)
            }
        }
    }
}
