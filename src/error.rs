use std::fmt;

/// Connector error with a coarse kind for branching.
///
/// Public operations never surface this type; it exists for construction and
/// configuration paths and is flattened into the response envelope elsewhere.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
}

/// Failure category.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Invalid configuration value, e.g. an unparseable base URL.
    Config,
    /// Client certificate or key could not be loaded.
    Certificate,
    /// Local file I/O failed.
    Io,
    /// The HTTP transport failed before or during a request.
    Transport,
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Config,
            message: message.into(),
        }
    }

    pub(crate) fn certificate(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Certificate,
            message: message.into(),
        }
    }

    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Transport,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: Kind::Io,
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self {
            kind: Kind::Transport,
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self {
            kind: Kind::Config,
            message: err.to_string(),
        }
    }
}
