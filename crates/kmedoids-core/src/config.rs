//! Configuration for a clustering run.
//!
//! All parameters are validated at construction time; invalid
//! configurations result in immediate errors. Whether `k` fits the
//! dataset is checked when the engine is built, since only then is N
//! known.

use crate::error::{ClusteringError, CoreResult};
use crate::executor::Scheduler;

/// Iteration cap applied when none is given explicitly.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Validated configuration for a [`crate::KMedoids`] run.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Number of clusters (K). Must be >= 1 and <= N.
    pub k: usize,

    /// Worker thread count. Must be >= 1; typically matches hardware
    /// parallelism.
    pub num_threads: usize,

    /// Iteration cap. Must be >= 1. The loop also stops earlier as soon
    /// as no medoid changes.
    pub max_iterations: usize,

    /// Scheduling backend for the parallel steps.
    pub scheduler: Scheduler,
}

impl EngineConfig {
    /// Create a configuration with the default iteration cap and the
    /// work-sharing scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::ZeroClusters`] or
    /// [`ClusteringError::ZeroThreads`] on out-of-range parameters.
    pub fn new(k: usize, num_threads: usize) -> CoreResult<Self> {
        if k == 0 {
            return Err(ClusteringError::ZeroClusters);
        }
        if num_threads == 0 {
            return Err(ClusteringError::ZeroThreads);
        }

        Ok(Self {
            k,
            num_threads,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scheduler: Scheduler::default(),
        })
    }

    /// Replace the iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::ZeroIterations`] if the cap is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> CoreResult<Self> {
        if max_iterations == 0 {
            return Err(ClusteringError::ZeroIterations);
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    /// Select the scheduling backend.
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }
}
