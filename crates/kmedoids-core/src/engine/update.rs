//! Medoid update step: re-elect each cluster's representative.

use crate::dataset::Dataset;
use crate::executor::ParallelExecutor;
use crate::metrics::euclidean_distance;

/// For every cluster, elect the member minimizing the summed distance
/// to all members of that cluster.
///
/// Returns one decision slot per cluster: `Some(point_index)` for the
/// elected medoid, `None` for an empty cluster (its medoid stays as-is;
/// this is a legal state, never an error). Candidates are scanned in
/// ascending point-index order and only a strictly smaller distance sum
/// replaces the incumbent, mirroring the assignment step's tie policy.
///
/// This is the O(|cluster|^2 * D) dominant cost of the algorithm.
/// Clusters are independent: each unit reads the shared dataset and
/// assignment vector and fills only its own decision slot.
pub(super) fn elect_medoids(
    dataset: &Dataset,
    assignments: &[usize],
    k: usize,
    executor: &ParallelExecutor,
) -> Vec<Option<usize>> {
    let mut decisions: Vec<Option<usize>> = vec![None; k];

    executor.for_each_slot(&mut decisions, |cluster, slot| {
        let members: Vec<usize> = assignments
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| (a == cluster).then_some(i))
            .collect();

        let mut best: Option<(usize, f64)> = None;
        for &candidate in &members {
            let total: f64 = members
                .iter()
                .map(|&other| euclidean_distance(dataset.point(candidate), dataset.point(other)))
                .sum();

            if best.map_or(true, |(_, best_total)| total < best_total) {
                best = Some((candidate, total));
            }
        }

        *slot = best.map(|(candidate, _)| candidate);
    });

    decisions
}
