//! K-medoids Core Library
//!
//! Parallel k-medoids clustering over low-dimensional point sets.
//!
//! # Architecture
//!
//! This crate defines:
//! - The immutable [`Dataset`] (row-major point storage with dimensions)
//! - Validated run configuration ([`EngineConfig`])
//! - A parallel-for executor with two scheduling backends ([`Scheduler`])
//! - The clustering engine itself ([`KMedoids`]) and its result type
//!   ([`ClusteringOutcome`])
//!
//! File parsing, argument handling, output formatting, and diagnostics
//! are the CLI's concern; the core assumes validated inputs and never
//! fails mid-run.
//!
//! # Algorithm
//!
//! 1. Seed medoids with the first K points of the dataset
//! 2. Assign each point to its nearest medoid (parallel over points)
//! 3. Re-elect each cluster's medoid as the member minimizing the total
//!    intra-cluster distance (parallel over clusters)
//! 4. Repeat until no medoid changes, or the iteration cap is reached
//!
//! # Determinism
//!
//! Repeated runs with the same dataset and configuration produce
//! bit-identical assignments and medoids for any thread count and either
//! scheduling backend. Ties are broken toward the lowest index in both
//! the assignment and the update step.
//!
//! # Example
//!
//! ```
//! use kmedoids_core::{Dataset, EngineConfig, KMedoids};
//!
//! let dataset = Dataset::new(vec![0.0, 1.0, 10.0, 11.0], 4, 1)?;
//! let config = EngineConfig::new(2, 1)?;
//! let outcome = KMedoids::new(dataset, config)?.fit();
//! assert!(outcome.converged);
//! # Ok::<(), kmedoids_core::ClusteringError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod executor;
pub mod metrics;
pub mod types;

// Re-exports for convenience
pub use config::EngineConfig;
pub use dataset::Dataset;
pub use engine::KMedoids;
pub use error::{ClusteringError, CoreResult};
pub use executor::{ParallelExecutor, Scheduler};
pub use types::{ClusteringOutcome, MedoidSet};
