// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sha256 CLI entry point
//!
//! Parses arguments, configures logging, and dispatches to [`run_hash`].

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sha256_cli::run::{HashArgs, run_hash};
use sha256_cli::{EXIT_FAILURE, EXIT_USAGE};

/// Compute the SHA-256 digest of a message or a file.
#[derive(Parser, Debug)]
#[command(
    name = "sha256",
    version,
    about,
    long_about = None,
    after_help = "INPUT may be the message to hash or a path to a file. \
                  Quote messages that contain spaces."
)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    hash: HashArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.hash.inputs.is_empty() {
        let help = Cli::command().render_help();
        if let Err(e) = write!(io::stdout(), "{help}") {
            tracing::error!("failed to print usage: {e}");
        }
        return ExitCode::from(EXIT_USAGE);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_hash(&cli.hash, &mut out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// `-v` count selects the default level; `RUST_LOG` overrides it when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::num::NonZeroUsize;

    use sha256_cli::input::InputMode;

    use super::*;

    #[test]
    fn cli_parse_single_message() {
        let cli = Cli::try_parse_from(["sha256", "abc"]).unwrap();
        assert_eq!(cli.hash.inputs, vec![OsString::from("abc")]);
        assert_eq!(cli.hash.mode, InputMode::Auto);
        assert!(cli.hash.jobs.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_no_input_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["sha256"]).unwrap();
        assert!(cli.hash.inputs.is_empty());
    }

    #[test]
    fn cli_parse_mode_and_jobs() {
        let cli =
            Cli::try_parse_from(["sha256", "--mode", "file", "-j", "3", "/a", "/b"]).unwrap();
        assert_eq!(cli.hash.mode, InputMode::File);
        assert_eq!(cli.hash.jobs, NonZeroUsize::new(3));
        assert_eq!(cli.hash.inputs.len(), 2);
    }

    #[test]
    fn cli_parse_zero_jobs_errors() {
        assert!(Cli::try_parse_from(["sha256", "-j", "0", "abc"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_mode_errors() {
        assert!(Cli::try_parse_from(["sha256", "--mode", "binary", "abc"]).is_err());
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli = Cli::try_parse_from(["sha256", "-vv", "abc"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_message_with_spaces() {
        let cli = Cli::try_parse_from(["sha256", "hello world"]).unwrap();
        assert_eq!(cli.hash.inputs, vec![OsString::from("hello world")]);
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
