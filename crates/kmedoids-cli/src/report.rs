//! Run reporting: timing line, optional per-cluster diagnostics, and
//! the machine-readable JSON summary.
//!
//! Diagnostics are derived purely from the core's outcome; they have no
//! bearing on the algorithm's correctness and live here, outside the
//! engine.

use serde::Serialize;

use kmedoids_core::metrics::euclidean_distance;
use kmedoids_core::{ClusteringOutcome, Dataset, Scheduler};

/// Machine-readable summary of one clustering run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub num_points: usize,
    pub num_dims: usize,
    pub num_clusters: usize,
    pub num_threads: usize,
    pub scheduler: &'static str,
    pub iterations: usize,
    pub converged: bool,
    pub elapsed_seconds: f64,
    pub cluster_sizes: Vec<usize>,
}

impl RunSummary {
    /// Assemble a summary from the dataset and engine outcome.
    pub fn new(
        dataset: &Dataset,
        outcome: &ClusteringOutcome,
        num_threads: usize,
        scheduler: Scheduler,
    ) -> Self {
        Self {
            num_points: dataset.len(),
            num_dims: dataset.num_dims(),
            num_clusters: outcome.num_clusters(),
            num_threads,
            scheduler: scheduler_label(scheduler),
            iterations: outcome.iterations,
            converged: outcome.converged,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            cluster_sizes: outcome.cluster_sizes(),
        }
    }
}

/// Stable string form of the scheduler for summaries and logs.
pub fn scheduler_label(scheduler: Scheduler) -> &'static str {
    match scheduler {
        Scheduler::WorkSharing => "work-sharing",
        Scheduler::ChunkAndJoin => "chunk-and-join",
    }
}

/// Per-cluster descriptive statistics.
#[derive(Debug)]
pub struct ClusterStats {
    /// Member count.
    pub size: usize,
    /// Mean of member coordinates; empty for an empty cluster.
    pub centroid: Vec<f64>,
    /// Average member distance to the cluster's medoid.
    pub avg_distance_to_medoid: f64,
}

/// Compute sizes, centroids, and average medoid spread per cluster.
pub fn compute_cluster_stats(dataset: &Dataset, outcome: &ClusteringOutcome) -> Vec<ClusterStats> {
    let k = outcome.num_clusters();
    let d = dataset.num_dims();

    let mut sizes = vec![0usize; k];
    let mut sums = vec![vec![0.0f64; d]; k];
    let mut spreads = vec![0.0f64; k];

    for (i, &cluster) in outcome.assignments.iter().enumerate() {
        let point = dataset.point(i);
        sizes[cluster] += 1;
        for (dim, &coord) in point.iter().enumerate() {
            sums[cluster][dim] += f64::from(coord);
        }
        spreads[cluster] += euclidean_distance(point, outcome.medoids.row(cluster));
    }

    sizes
        .into_iter()
        .zip(sums)
        .zip(spreads)
        .map(|((size, mut sum), spread)| {
            if size == 0 {
                return ClusterStats {
                    size: 0,
                    centroid: Vec::new(),
                    avg_distance_to_medoid: 0.0,
                };
            }
            for value in sum.iter_mut() {
                *value /= size as f64;
            }
            ClusterStats {
                size,
                centroid: sum,
                avg_distance_to_medoid: spread / size as f64,
            }
        })
        .collect()
}

/// Print the `--stats` diagnostics block to stdout.
pub fn print_cluster_stats(dataset: &Dataset, outcome: &ClusteringOutcome) {
    println!("\nCluster statistics:");
    for (cluster, stats) in compute_cluster_stats(dataset, outcome).iter().enumerate() {
        println!("Cluster {cluster}:");
        println!("  size: {} points", stats.size);
        if stats.size == 0 {
            println!("  (empty; medoid unchanged)");
            continue;
        }
        let centroid: String = stats
            .centroid
            .iter()
            .map(|v| format!("{v:.3} "))
            .collect();
        println!("  centroid: {centroid}");
        println!(
            "  average distance to medoid: {:.3}",
            stats.avg_distance_to_medoid
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kmedoids_core::{EngineConfig, KMedoids};

    fn outcome_1d(coords: &[f32], k: usize) -> (Dataset, ClusteringOutcome) {
        let dataset = Dataset::new(coords.to_vec(), coords.len(), 1).unwrap();
        let engine = KMedoids::new(dataset.clone(), EngineConfig::new(k, 1).unwrap()).unwrap();
        (dataset, engine.fit())
    }

    #[test]
    fn test_cluster_stats_sizes_and_centroids() {
        let (dataset, outcome) = outcome_1d(&[0.0, 1.0, 10.0, 11.0], 2);

        let stats = compute_cluster_stats(&dataset, &outcome);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].size, 2);
        assert_eq!(stats[1].size, 2);
        assert!((stats[0].centroid[0] - 0.5).abs() < 1e-9);
        assert!((stats[1].centroid[0] - 10.5).abs() < 1e-9);
        // Medoids are 0 and 10; members sit 0 and 1 units away.
        assert!((stats[0].avg_distance_to_medoid - 0.5).abs() < 1e-9);
        assert!((stats[1].avg_distance_to_medoid - 0.5).abs() < 1e-9);

        println!("[VERIFIED] cluster stats match hand-computed values");
    }

    #[test]
    fn test_cluster_stats_empty_cluster() {
        // Both seeds start at 5.0, so cluster 1 attracts nothing.
        let (dataset, outcome) = outcome_1d(&[5.0, 5.0, 7.0], 2);

        let stats = compute_cluster_stats(&dataset, &outcome);

        assert_eq!(stats[0].size, 3);
        assert_eq!(stats[1].size, 0);
        assert!(stats[1].centroid.is_empty());
        assert_eq!(stats[1].avg_distance_to_medoid, 0.0);

        println!("[VERIFIED] empty cluster yields empty diagnostics, no panic");
    }

    #[test]
    fn test_run_summary_serializes() {
        let (dataset, outcome) = outcome_1d(&[0.0, 1.0, 10.0, 11.0], 2);

        let summary = RunSummary::new(&dataset, &outcome, 1, Scheduler::WorkSharing);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"num_points\":4"));
        assert!(json.contains("\"scheduler\":\"work-sharing\""));
        assert!(json.contains("\"converged\":true"));
        assert!(json.contains("\"cluster_sizes\":[2,2]"));

        println!("[VERIFIED] RunSummary serializes with stable field names");
    }
}
