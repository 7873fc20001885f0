//! Distance metric for clustering.
//!
//! Both the assignment step and the medoid update step call the same
//! function with the same numeric semantics: coordinates are `f32`, the
//! accumulation is `f64`, so the two steps can never drift apart.

/// Compute the Euclidean (L2) distance between two points.
///
/// Accumulates in `f64` even though coordinates are stored as `f32`.
/// Deterministic, no side effects; callers guarantee equal lengths.
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = f64::from(*x) - f64::from(*y);
            diff * diff
        })
        .sum();
    sum.sqrt()
}
