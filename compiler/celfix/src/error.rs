//! Errors surfaced by the `celfix` commands.

use std::io;
use std::path::PathBuf;

use celfix_proto::DecodeError;
use thiserror::Error;

/// Failure of a command. Each variant renders as a one-line message.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot find file '{}'", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A corpus file that is not a list of test files.
    #[error("invalid corpus '{}': {source}", path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A parse result that could not be decoded.
    #[error("cannot decode {origin}: {source}")]
    Decode {
        /// Test name or file path the document came from.
        origin: String,
        #[source]
        source: DecodeError,
    },

    #[error("cannot serialize fixtures: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CommandError {
    /// Classify a read failure the way users expect to see it.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path, source },
            io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path, source },
            _ => CommandError::Read { path, source },
        }
    }
}
