//! Immutable point storage.
//!
//! Points live in one heap-allocated row-major buffer with the shape
//! stored alongside. Bounds are validated once at construction, never
//! re-checked per access.

use crate::error::{ClusteringError, CoreResult};

/// An ordered set of N points in D-dimensional space.
///
/// Identity of a point is its row index. The dataset is constructed once
/// before clustering and never mutated.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Row-major coordinates, length `num_points * num_dims`.
    coords: Vec<f32>,
    num_points: usize,
    num_dims: usize,
}

impl Dataset {
    /// Create a dataset from a row-major coordinate buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ClusteringError`] if the dataset is empty, the
    /// dimensionality is zero, the buffer length does not equal
    /// `num_points * num_dims`, or any coordinate is NaN/infinite.
    pub fn new(coords: Vec<f32>, num_points: usize, num_dims: usize) -> CoreResult<Self> {
        if num_points == 0 {
            return Err(ClusteringError::EmptyDataset);
        }
        if num_dims == 0 {
            return Err(ClusteringError::ZeroDimensions);
        }
        let expected = num_points * num_dims;
        if coords.len() != expected {
            return Err(ClusteringError::ShapeMismatch {
                expected,
                actual: coords.len(),
            });
        }
        if let Some(pos) = coords.iter().position(|c| !c.is_finite()) {
            return Err(ClusteringError::NonFiniteCoordinate {
                point: pos / num_dims,
                dim: pos % num_dims,
            });
        }

        Ok(Self {
            coords,
            num_points,
            num_dims,
        })
    }

    /// Coordinates of point `i` as a slice of length `num_dims`.
    #[inline]
    pub fn point(&self, i: usize) -> &[f32] {
        let start = i * self.num_dims;
        &self.coords[start..start + self.num_dims]
    }

    /// Number of points (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// True if the dataset holds no points. Construction forbids this;
    /// provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Dimensionality (D).
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }
}
