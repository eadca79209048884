#![forbid(unsafe_code)]

//! Inference-app: a command-line scaffold that simulates an inference service
//!
//! The binary parses generic `--key value` flags, prints timestamped log
//! lines, pauses briefly to emulate model initialization, then ticks a
//! counter in an endless inference loop until the process is killed.

pub mod app;
pub mod error;
pub mod logger;
pub mod options;

pub use error::{AppError, Result};
