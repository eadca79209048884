#![forbid(unsafe_code)]

//! Timestamped console logging
//!
//! Stateless helpers that write lines of the form
//! `[<local timestamp>] [<LEVEL>] <message>` to standard output. The level
//! selects a display label (and a color when stdout is a terminal); nothing
//! in the program filters or compares levels.

use crate::error::Result;
use chrono::Local;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Severity tag attached to a log line.
///
/// Display-only: it picks the line's label and terminal color, nothing else.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Display label embedded in the bracketed level field.
    ///
    /// Total over the current tags, with an explicit fallback so a variant
    /// added later cannot silently borrow another level's label.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            #[allow(unreachable_patterns)]
            _ => "UNKNOWN",
        }
    }

    /// Terminal color for the level field
    fn color(self) -> Color {
        match self {
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
            #[allow(unreachable_patterns)]
            _ => Color::White,
        }
    }
}

/// Render the plain form of a log line from its parts.
///
/// This is the format contract for piped output; [`log`] adds color around
/// the level field only when stdout is a terminal. Kept separate so the
/// format is testable without capturing the process's stdout.
pub fn format_line(level: LogLevel, timestamp: &str, message: &str) -> String {
    format!("[{}] [{}] {}", timestamp, level.label(), message)
}

/// Write one log line to standard output.
///
/// The timestamp is the current wall-clock local time in ctime style
/// (e.g. `Thu Aug  7 14:03:05 2026`). A write failure propagates to the
/// caller; there is no recovery path.
pub fn log(level: LogLevel, message: &str) -> Result<()> {
    let timestamp = Local::now().format("%c");
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    write!(stdout, "[{}] [", timestamp)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(level.color())))?;
    write!(stdout, "{}", level.label())?;
    stdout.reset()?;
    writeln!(stdout, "] {}", message)?;

    Ok(())
}

/// Log a message at DEBUG level
pub fn debug(message: &str) -> Result<()> {
    log(LogLevel::Debug, message)
}

/// Log a message at INFO level
pub fn info(message: &str) -> Result<()> {
    log(LogLevel::Info, message)
}

/// Log a message at WARN level
pub fn warn(message: &str) -> Result<()> {
    log(LogLevel::Warn, message)
}

/// Log a message at ERROR level
pub fn error(message: &str) -> Result<()> {
    log(LogLevel::Error, message)
}
