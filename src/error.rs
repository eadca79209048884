#![forbid(unsafe_code)]

//! Crate error type
//!
//! The only fallible operation in this program is writing a log line to
//! standard output; everything else is infallible by design (malformed
//! flags are ignored, not rejected).

use thiserror::Error;

/// Errors surfaced by the inference scaffold
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing to standard output failed
    #[error("failed to write to stdout: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;
