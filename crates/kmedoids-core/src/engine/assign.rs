//! Assignment step: nearest medoid per point.

use crate::dataset::Dataset;
use crate::executor::ParallelExecutor;
use crate::metrics::euclidean_distance;
use crate::types::MedoidSet;

/// Assign every point to its nearest medoid, overwriting `assignments`
/// in full.
///
/// Medoid 0 seeds the search; a later medoid wins only on a strictly
/// smaller distance, so exact ties keep the lowest medoid index. This
/// first-seen-wins policy is what makes runs reproducible across thread
/// counts and must not be weakened to `<=`.
///
/// Point computations are independent: each parallel unit reads the
/// shared dataset and medoids and writes only its own assignment slot.
pub(super) fn assign_points(
    dataset: &Dataset,
    medoids: &MedoidSet,
    assignments: &mut [usize],
    executor: &ParallelExecutor,
) {
    executor.for_each_slot(assignments, |i, slot| {
        let point = dataset.point(i);

        let mut closest = 0usize;
        let mut min_distance = euclidean_distance(point, medoids.row(0));
        for j in 1..medoids.len() {
            let distance = euclidean_distance(point, medoids.row(j));
            if distance < min_distance {
                closest = j;
                min_distance = distance;
            }
        }

        *slot = closest;
    });
}
