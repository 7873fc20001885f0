//! Result types for k-medoids clustering.

use std::time::Duration;

use crate::dataset::Dataset;

/// The K current medoids, stored as coordinate copies (never references
/// into the dataset), row-major like [`Dataset`].
///
/// Replaced as a whole between iterations: the assignment step of
/// iteration t+1 only ever observes the set committed at the end of
/// iteration t.
#[derive(Clone, Debug, PartialEq)]
pub struct MedoidSet {
    coords: Vec<f32>,
    num_dims: usize,
}

impl MedoidSet {
    /// Seed a medoid set from the first K points of the dataset.
    pub(crate) fn seed_from_first_points(dataset: &Dataset, k: usize) -> Self {
        let num_dims = dataset.num_dims();
        let mut coords = Vec::with_capacity(k * num_dims);
        for i in 0..k {
            coords.extend_from_slice(dataset.point(i));
        }
        Self { coords, num_dims }
    }

    /// Coordinates of medoid `k` as a slice of length `num_dims`.
    #[inline]
    pub fn row(&self, k: usize) -> &[f32] {
        let start = k * self.num_dims;
        &self.coords[start..start + self.num_dims]
    }

    /// Overwrite medoid `k` with a coordinate copy of `point`.
    pub(crate) fn set_row(&mut self, k: usize, point: &[f32]) {
        let start = k * self.num_dims;
        self.coords[start..start + self.num_dims].copy_from_slice(point);
    }

    /// Number of medoids (K).
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / self.num_dims
    }

    /// True if the set holds no medoids. Cannot occur for a validated
    /// engine; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Dimensionality (D).
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    /// Iterate over medoid rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.coords.chunks_exact(self.num_dims)
    }
}

/// Result of running the engine to completion.
///
/// Exposed by the terminal state of the convergence controller: the
/// final assignments and medoids, plus convergence bookkeeping and the
/// wall-clock duration of the iterate-to-convergence loop.
#[derive(Clone, Debug)]
pub struct ClusteringOutcome {
    /// Cluster index in `[0, K)` for every point, in point order.
    pub assignments: Vec<usize>,

    /// Final medoid coordinates.
    pub medoids: MedoidSet,

    /// Iterations actually executed.
    pub iterations: usize,

    /// True if the loop stopped because no medoid changed; false if it
    /// hit the iteration cap.
    pub converged: bool,

    /// Wall-clock duration of the full clustering loop.
    pub elapsed: Duration,
}

impl ClusteringOutcome {
    /// Number of clusters (K).
    #[inline]
    pub fn num_clusters(&self) -> usize {
        self.medoids.len()
    }

    /// Member counts per cluster, derived by scanning the assignments.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.num_clusters()];
        for &cluster in &self.assignments {
            sizes[cluster] += 1;
        }
        sizes
    }
}
