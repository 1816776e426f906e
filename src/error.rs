// src/error.rs
// =============================================================================
// Every way grading can fail, in one enum.
//
// Library functions return Result<T, GradeError>. The binary wraps these in
// anyhow::Error at the top level, prints the message and exits with code 1.
//
// InvalidSelector and UnsupportedSelector are the odd ones out: the checker
// never returns them to the caller. The selector is logged and reported as
// `false` for its key.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading checks, resolving the source or grading.
#[derive(Debug, Error)]
pub enum GradeError {
    /// A checks file or HTML file path does not exist
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The checks file is not a JSON array of strings
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Downloading the page failed (transport error or non-2xx status)
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The --url value is not an absolute http(s) URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A selector string could not be parsed as CSS
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Valid CSS that the selector engine can't evaluate (e.g. `:has()`)
    #[error("unsupported selector '{selector}': the pseudo-class or pseudo-element ':{pseudo}' is not supported")]
    UnsupportedSelector { selector: String, pseudo: String },

    /// The HTTP client itself could not be built
    #[error("could not create HTTP client: {message}")]
    Client { message: String },

    /// Any other I/O failure while reading a file
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GradeError {
    /// Maps an io::Error on `path` to NotFound or Io
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GradeError::NotFound { path }
        } else {
            GradeError::Io { path, source }
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, GradeError>;
