use std::fmt;

/// Configuration or usage failure.
///
/// Semantic differences between documents are never reported through this
/// type; they accumulate in [`CompareResult`](crate::CompareResult). `Error`
/// covers the cases where the comparison could not be set up at all.
#[derive(Debug)]
pub enum Error {
    /// A textual input could not be parsed into a JSON document.
    Parse(serde_json::Error),
    /// A customization path pattern is malformed.
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
    /// A value-matcher regular expression failed to compile.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(error) => write!(f, "invalid JSON document: {error}"),
            Error::InvalidPattern { pattern, reason } => {
                write!(f, "invalid path pattern {pattern:?}: {reason}")
            }
            Error::InvalidRegex { pattern, source } => {
                write!(f, "invalid regular expression {pattern:?}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(error) => Some(error),
            Error::InvalidRegex { source, .. } => Some(source),
            Error::InvalidPattern { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Parse(error)
    }
}
