//! Error types for kmedoids-core.
//!
//! The core has no recoverable-error taxonomy of its own: every variant
//! here is a construction-time validation failure. Once a [`crate::KMedoids`]
//! engine is built, the run cannot fail.
//!
//! - Use `thiserror` for library error types
//! - Never panic in library code; return Result
//! - Propagate errors with the `?` operator

use thiserror::Error;

/// Validation errors raised while constructing core types.
#[derive(Debug, Error)]
pub enum ClusteringError {
    /// The dataset contains no points.
    #[error("dataset must contain at least one point")]
    EmptyDataset,

    /// The dataset's dimensionality is zero.
    #[error("dimensionality must be >= 1")]
    ZeroDimensions,

    /// The coordinate buffer does not match the declared shape.
    #[error("coordinate buffer holds {actual} values, expected {expected} (num_points * num_dims)")]
    ShapeMismatch {
        /// `num_points * num_dims`.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("coordinate at point {point}, dimension {dim} is not finite")]
    NonFiniteCoordinate {
        /// Row index of the offending point.
        point: usize,
        /// Column index of the offending coordinate.
        dim: usize,
    },

    /// The requested cluster count is zero.
    #[error("number of clusters must be >= 1")]
    ZeroClusters,

    /// More clusters were requested than points exist.
    #[error("number of clusters ({k}) exceeds number of points ({num_points})")]
    TooManyClusters {
        /// Requested cluster count.
        k: usize,
        /// Points available in the dataset.
        num_points: usize,
    },

    /// The requested worker count is zero.
    #[error("number of threads must be >= 1")]
    ZeroThreads,

    /// The iteration cap is zero.
    #[error("max_iterations must be >= 1")]
    ZeroIterations,

    /// The rayon worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias used throughout the core.
pub type CoreResult<T> = Result<T, ClusteringError>;
