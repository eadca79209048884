#![forbid(unsafe_code)]

//! Command-line flag parsing
//!
//! Parses `--key value` token pairs into a string-to-string table. The
//! parser is generic: any key is accepted and stored, malformed tokens are
//! silently skipped, and `--help` prints the usage text and short-circuits
//! the scan so the caller can exit.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Fixed usage text printed for `--help`
pub const USAGE: &str = "\
Usage: inference-app [options]
Options:
  --model <model_path>       Path to the model file
  --config <config_file>     Path to the config file
  --log_level <level>        Set log level (DEBUG, INFO, WARN, ERROR)
  --log <log_file>           Set log output file
  --help                     Show this help message
";

/// Signal from [`Options::parse_opts`] telling the caller how to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseControl {
    /// Parsing finished; continue with normal startup
    Continue,
    /// `--help` was seen and the usage text printed; exit with code 0
    HelpRequested,
}

/// Parsed startup flags.
///
/// Keys are stored without their `--` prefix. A `BTreeMap` keeps the
/// diagnostic rendering in deterministic key order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    args: BTreeMap<String, String>,
}

impl Options {
    /// Creates an empty options table
    pub fn new() -> Self {
        Options::default()
    }

    /// Scan startup argument tokens left to right, storing `--key value`
    /// pairs.
    ///
    /// Rules, applied per token in a single pass with no backtracking:
    ///
    /// - exactly `--help`: print the usage text and return
    ///   [`ParseControl::HelpRequested`] without looking at the remaining
    ///   tokens. The parser never terminates the process itself; the caller
    ///   exits 0 on seeing the signal.
    /// - starts with `--` and a next token exists: the remainder after the
    ///   prefix is the key, the next token is the value (taken verbatim,
    ///   even if it starts with `--`). Stores `key -> value`, last write
    ///   wins, and advances past both tokens.
    /// - anything else (a bare token, a trailing `--key` with no value):
    ///   skipped with no error and no storage.
    ///
    /// Values are never validated against an allowed set or type.
    pub fn parse_opts<I>(&mut self, tokens: I) -> Result<ParseControl>
    where
        I: IntoIterator<Item = String>,
    {
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            if token == "--help" {
                Self::help()?;
                return Ok(ParseControl::HelpRequested);
            }

            if let Some(key) = token.strip_prefix("--")
                && let Some(value) = tokens.next()
            {
                self.args.insert(key.to_string(), value);
            }
        }

        Ok(ParseControl::Continue)
    }

    /// Value stored for `key`, or `default` when the key is absent.
    ///
    /// Pure read; never fails. Callers wanting the empty string as the
    /// default pass `""`.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.args.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Print the fixed usage text to standard output.
    ///
    /// No side effect besides the print; exiting on `--help` is the
    /// caller's job.
    pub fn help() -> Result<()> {
        io::stdout().write_all(USAGE.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for Options {
    /// Diagnostic rendering: one `key: value` line per stored pair, in key
    /// order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.args {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
