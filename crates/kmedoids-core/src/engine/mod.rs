//! The clustering engine and convergence controller.
//!
//! # Control flow
//!
//! Each iteration: assignment step (parallel over points, full barrier)
//! → medoid update step (parallel over clusters, full barrier) → commit
//! the elected medoids and OR-reduce the per-cluster change signals.
//! The loop stops when no medoid changed, or when the configured
//! iteration cap is reached. There is no other exit: a validated engine
//! never fails mid-run.
//!
//! # Ownership
//!
//! The engine exclusively owns the dataset, the medoid buffer, and the
//! assignment vector for the run's duration; the steps receive them by
//! reference. Nothing is global, so independent engines can run
//! concurrently without interference.

mod assign;
mod update;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::dataset::Dataset;
use crate::error::{ClusteringError, CoreResult};
use crate::executor::ParallelExecutor;
use crate::types::{ClusteringOutcome, MedoidSet};

/// Iterative k-medoids clustering over an owned dataset.
pub struct KMedoids {
    dataset: Dataset,
    config: EngineConfig,
    executor: ParallelExecutor,
    medoids: MedoidSet,
    assignments: Vec<usize>,
    iterations: usize,
}

impl KMedoids {
    /// Build an engine for one clustering run.
    ///
    /// Initial medoids are the first K points of the dataset, copied by
    /// coordinate (deterministic seeding, not random).
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::TooManyClusters`] if `config.k`
    /// exceeds the number of points, or a pool construction error from
    /// the executor.
    pub fn new(dataset: Dataset, config: EngineConfig) -> CoreResult<Self> {
        if config.k > dataset.len() {
            return Err(ClusteringError::TooManyClusters {
                k: config.k,
                num_points: dataset.len(),
            });
        }

        let executor = ParallelExecutor::new(config.scheduler, config.num_threads)?;
        let medoids = MedoidSet::seed_from_first_points(&dataset, config.k);
        let assignments = vec![0usize; dataset.len()];

        Ok(Self {
            dataset,
            config,
            executor,
            medoids,
            assignments,
            iterations: 0,
        })
    }

    /// Run one full iteration: assign, update, commit.
    ///
    /// Returns true if any medoid changed. Exposed so callers can drive
    /// the loop themselves; [`fit`](Self::fit) is the usual entry point.
    pub fn step(&mut self) -> bool {
        assign::assign_points(
            &self.dataset,
            &self.medoids,
            &mut self.assignments,
            &self.executor,
        );

        let decisions = update::elect_medoids(
            &self.dataset,
            &self.assignments,
            self.medoids.len(),
            &self.executor,
        );

        let changed = self.commit(&decisions);
        self.iterations += 1;
        changed
    }

    /// Commit elected medoids sequentially and reduce the change flag.
    ///
    /// A cluster contributes "changed" only if the elected point's
    /// coordinates differ from the current medoid row; an empty cluster
    /// (no decision) leaves its medoid untouched. The OR across clusters
    /// is order-independent.
    fn commit(&mut self, decisions: &[Option<usize>]) -> bool {
        let mut changed = false;
        for (k, decision) in decisions.iter().enumerate() {
            let Some(i) = decision else {
                continue;
            };
            let elected = self.dataset.point(*i);
            if self.medoids.row(k) != elected {
                self.medoids.set_row(k, elected);
                changed = true;
            }
        }
        changed
    }

    /// Iterate to convergence (or the iteration cap) and return the
    /// final assignments, medoids, and loop timing.
    pub fn fit(mut self) -> ClusteringOutcome {
        info!(
            n = self.dataset.len(),
            d = self.dataset.num_dims(),
            k = self.config.k,
            threads = self.config.num_threads,
            scheduler = ?self.config.scheduler,
            "starting k-medoids clustering"
        );

        let start = Instant::now();
        let mut converged = false;

        while self.iterations < self.config.max_iterations {
            let changed = self.step();
            debug!(iteration = self.iterations, changed, "iteration complete");
            if !changed {
                converged = true;
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            iterations = self.iterations,
            converged,
            elapsed_us = elapsed.as_micros() as u64,
            "clustering finished"
        );

        ClusteringOutcome {
            assignments: self.assignments,
            medoids: self.medoids,
            iterations: self.iterations,
            converged,
            elapsed,
        }
    }

    /// Current assignment vector (recomputed each [`step`](Self::step)).
    #[inline]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Current medoid set.
    #[inline]
    pub fn medoids(&self) -> &MedoidSet {
        &self.medoids
    }

    /// Iterations executed so far.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
