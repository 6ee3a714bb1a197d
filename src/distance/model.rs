//! Paired duration and distance matrices over the same waypoints.

use crate::error::{MatrixKind, RoutingError};

use super::DenseMatrix;

/// Validated duration (seconds) and distance (meters) matrices over N waypoints.
///
/// Waypoints are plain indices `0..N`. Both matrices are treated as a directed
/// graph; the diagonal is never read. Off-diagonal entries must be
/// non-negative, with `f64::INFINITY` standing for an unreachable pair.
///
/// # Examples
///
/// ```
/// use routegen_core::distance::MatrixModel;
///
/// let model = MatrixModel::from_rows(
///     &[vec![0.0, 60.0], vec![60.0, 0.0]],
///     &[vec![0.0, 1000.0], vec![1000.0, 0.0]],
/// )
/// .unwrap();
/// assert_eq!(model.size(), 2);
/// assert_eq!(model.distance(0, 1), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixModel {
    durations: DenseMatrix,
    distances: DenseMatrix,
}

impl MatrixModel {
    /// Pairs two dense matrices after checking size and entries.
    pub fn new(durations: DenseMatrix, distances: DenseMatrix) -> Result<Self, RoutingError> {
        if durations.size() != distances.size() {
            return Err(RoutingError::DimensionMismatch {
                duration: durations.size(),
                distance: distances.size(),
            });
        }
        durations.check_entries(MatrixKind::Duration)?;
        distances.check_entries(MatrixKind::Distance)?;
        Ok(Self {
            durations,
            distances,
        })
    }

    /// Builds a model from nested rows as returned by a matrix provider.
    pub fn from_rows(durations: &[Vec<f64>], distances: &[Vec<f64>]) -> Result<Self, RoutingError> {
        let durations = DenseMatrix::from_rows_of(MatrixKind::Duration, durations)?;
        let distances = DenseMatrix::from_rows_of(MatrixKind::Distance, distances)?;
        Self::new(durations, distances)
    }

    /// Number of waypoints.
    pub fn size(&self) -> usize {
        self.durations.size()
    }

    /// Travel time in seconds from `from` to `to`.
    pub fn duration(&self, from: usize, to: usize) -> f64 {
        self.durations.get(from, to)
    }

    /// Travel distance in meters from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The duration matrix (seconds).
    pub fn durations(&self) -> &DenseMatrix {
        &self.durations
    }

    /// The distance matrix (meters).
    pub fn distances(&self) -> &DenseMatrix {
        &self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let model = MatrixModel::from_rows(
            &[vec![0.0, 60.0], vec![90.0, 0.0]],
            &[vec![0.0, 1000.0], vec![1500.0, 0.0]],
        )
        .expect("valid");
        assert_eq!(model.size(), 2);
        assert_eq!(model.duration(1, 0), 90.0);
        assert_eq!(model.distance(1, 0), 1500.0);
        assert_eq!(model.distances().get(0, 1), 1000.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = MatrixModel::new(
            DenseMatrix::from_fn(2, |_, _| 0.0),
            DenseMatrix::from_fn(3, |_, _| 0.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RoutingError::DimensionMismatch {
                duration: 2,
                distance: 3
            }
        );
    }

    #[test]
    fn test_ragged_duration_row() {
        let err = MatrixModel::from_rows(
            &[vec![0.0, 1.0], vec![1.0, 0.0, 4.0]],
            &[vec![0.0, 1.0], vec![1.0, 0.0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RoutingError::RaggedRow {
                matrix: MatrixKind::Duration,
                row: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = MatrixModel::from_rows(
            &[vec![0.0, 1.0], vec![1.0, 0.0]],
            &[vec![0.0, -5.0], vec![1.0, 0.0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidEntry {
                matrix: MatrixKind::Distance,
                from: 0,
                to: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_model() {
        let model = MatrixModel::from_rows(&[], &[]).expect("empty");
        assert_eq!(model.size(), 0);
    }

    #[test]
    fn test_unreachable_entries_allowed() {
        let model = MatrixModel::from_rows(
            &[vec![0.0, f64::INFINITY], vec![1.0, 0.0]],
            &[vec![0.0, f64::INFINITY], vec![1.0, 0.0]],
        )
        .expect("infinity marks unreachable");
        assert!(model.distance(0, 1).is_infinite());
    }
}
