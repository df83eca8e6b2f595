//! Error types for SriGen
//!
//! This module defines all error types used throughout the application,
//! one variant per failure mode of the digest pipeline, carrying enough
//! context (path, URL, target) for actionable user-facing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SriGen operations
#[derive(Error, Debug)]
pub enum SrigenError {
    /// Transport-level failure fetching a remote target
    #[error("failed to fetch '{url}': {source}")]
    Fetch {
        /// Fetch URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// A local file could not be opened for reading
    #[error("failed to open '{path}': {source}")]
    FileOpen {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from an open byte stream failed mid-digest
    #[error("failed reading from '{target}': {source}")]
    StreamRead {
        /// Target whose stream failed
        target: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory target could not be enumerated
    #[error("failed to list directory '{path}': {source}")]
    DirectoryList {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A generate call produced no integrity records
    #[error("no integrity records produced for targets {targets:?}")]
    EmptyResult {
        /// The offending target set
        targets: Vec<String>,
    },

    /// Invalid arguments supplied to comparison mode
    #[error("{0}")]
    ComparisonInput(String),

    /// The serialized report could not be written
    #[error("unable to write output to '{path}': {source}")]
    OutputWrite {
        /// Output destination
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl SrigenError {
    /// Create a fetch error for a remote target
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a file-open error with path context
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a stream-read error naming the failing target
    pub fn stream_read(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::StreamRead {
            target: target.into(),
            source,
        }
    }

    /// Create a directory-listing error with path context
    pub fn directory_list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryList {
            path: path.into(),
            source,
        }
    }

    /// Create an empty-result error naming the target set
    pub fn empty_result<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::EmptyResult {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an output-write error with destination context
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileOpen { path, .. }
            | Self::DirectoryList { path, .. }
            | Self::OutputWrite { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for SriGen operations
pub type Result<T> = std::result::Result<T, SrigenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SrigenError::file_open("/test/path", io_err);
        assert_eq!(err.path().unwrap(), &PathBuf::from("/test/path"));
    }

    #[test]
    fn test_empty_result_names_targets() {
        let err = SrigenError::empty_result(["a.js", "b.js"]);
        let message = err.to_string();
        assert!(message.contains("a.js"));
        assert!(message.contains("b.js"));
    }

    #[test]
    fn test_comparison_input_message() {
        let err = SrigenError::ComparisonInput("expected exactly two targets for comparison".into());
        assert_eq!(err.to_string(), "expected exactly two targets for comparison");
        assert!(err.path().is_none());
    }
}
