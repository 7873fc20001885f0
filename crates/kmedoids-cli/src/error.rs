//! CLI-side error types.
//!
//! Everything here happens before the core engine is invoked (argument
//! and file validation) or after it returns (output writing). The core
//! itself never fails mid-run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the external collaborators: file parsing, validation,
/// and output writing.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input file does not start with an `N D` header.
    #[error("{path}: missing or incomplete 'N D' header")]
    MissingHeader {
        /// Input file.
        path: PathBuf,
    },

    /// A token could not be parsed as the expected type.
    #[error("{path}: invalid token '{token}' (expected {expected})")]
    InvalidToken {
        /// Input file.
        path: PathBuf,
        /// The offending token.
        token: String,
        /// What the parser expected at this position.
        expected: &'static str,
    },

    /// The file ended before N*D coordinates were read.
    #[error("{path}: expected {expected} coordinates, found {actual}")]
    TruncatedData {
        /// Input file.
        path: PathBuf,
        /// `N * D` per the header.
        expected: usize,
        /// Coordinates actually present.
        actual: usize,
    },

    /// A core validation error (bad k, thread count, shape, ...).
    #[error(transparent)]
    Clustering(#[from] kmedoids_core::ClusteringError),

    /// The JSON run summary could not be serialized.
    #[error("failed to serialize run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl CliError {
    /// Wrap an I/O error with the file it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
