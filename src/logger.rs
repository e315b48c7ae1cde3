//! Level-filtered line logger for connector diagnostics.
//!
//! Every line carries a `YYYY-MM-DD HH:MM:SS` timestamp and a lowercase level
//! label; structured detail is appended as JSON. Logging is diagnostics only
//! and never influences control flow.

use std::fmt;
use std::io::{self, Write as _};
use std::sync::Mutex;

use chrono::Utc;
use serde::Serialize;

/// Log severity, ordered `Debug < Info < Warn < Error`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parses a level name, case-insensitively.
    ///
    /// Unrecognized names fall back to `Info` rather than failing.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "WARN" => Self::Warn,
            "ERROR" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Reads `LOG_LEVEL`, defaulting to `Info` when unset or unrecognized.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("LOG_LEVEL").map_or(Self::Info, |value| Self::parse(&value))
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Line logger writing to stderr by default; the sink is injectable for tests.
pub struct Logger {
    level: Level,
    sink: Mutex<Box<dyn io::Write + Send>>,
}

impl Logger {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::with_sink(level, Box::new(io::stderr()))
    }

    /// Creates a logger with the level taken from `LOG_LEVEL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Level::from_env())
    }

    #[must_use]
    pub fn with_sink(level: Level, sink: Box<dyn io::Write + Send>) -> Self {
        Self {
            level,
            sink: Mutex::new(sink),
        }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.write(Level::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.write(Level::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.write(Level::Warn, message, None);
    }

    pub fn error(&self, message: &str) {
        self.write(Level::Error, message, None);
    }

    /// Logs at debug with structured detail serialized as JSON.
    pub fn debug_with<T: Serialize>(&self, message: &str, detail: &T) {
        self.write(Level::Debug, message, to_json(detail));
    }

    /// Logs at error with structured detail serialized as JSON.
    pub fn error_with<T: Serialize>(&self, message: &str, detail: &T) {
        self.write(Level::Error, message, to_json(detail));
    }

    fn write(&self, level: Level, message: &str, detail: Option<String>) {
        if level < self.level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        let label = level.label();
        let result = match detail {
            Some(detail) => writeln!(sink, "{timestamp} {label}: {message} {detail}"),
            None => writeln!(sink, "{timestamp} {label}: {message}"),
        };
        // A failed diagnostic write is not worth reporting anywhere.
        result.ok();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

fn to_json<T: Serialize>(detail: &T) -> Option<String> {
    serde_json::to_string(detail).ok()
}
