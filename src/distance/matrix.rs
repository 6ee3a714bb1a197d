//! Dense square matrix.

use crate::error::{MatrixKind, RoutingError};

/// A dense n×n matrix of `f64` stored in row-major order.
///
/// Used for both travel metrics (duration, distance) and derived grids
/// such as the pairwise price matrix. Entries are directed: `get(i, j)`
/// and `get(j, i)` may differ.
///
/// # Examples
///
/// ```
/// use routegen_core::distance::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(&[vec![0.0, 5.0], vec![7.0, 0.0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.get(1, 0), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DenseMatrix {
    /// Creates a matrix from nested rows, the shape a routing provider returns.
    ///
    /// Every row must have exactly `rows.len()` entries; a ragged row is
    /// reported against the distance matrix.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RoutingError> {
        Self::from_rows_of(MatrixKind::Distance, rows)
    }

    pub(crate) fn from_rows_of(kind: MatrixKind, rows: &[Vec<f64>]) -> Result<Self, RoutingError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(RoutingError::RaggedRow {
                    matrix: kind,
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Builds a matrix by evaluating `f(from, to)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for from in 0..size {
            for to in 0..size {
                data.push(f(from, to));
            }
        }
        Self { data, size }
    }

    /// Returns the entry from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }

    /// Checks that every off-diagonal entry is a non-negative number.
    ///
    /// `f64::INFINITY` is accepted and marks an unreachable pair.
    pub(crate) fn check_entries(&self, kind: MatrixKind) -> Result<(), RoutingError> {
        for from in 0..self.size {
            for to in 0..self.size {
                if from == to {
                    continue;
                }
                let value = self.get(from, to);
                if value.is_nan() || value < 0.0 {
                    return Err(RoutingError::InvalidEntry {
                        matrix: kind,
                        from,
                        to,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
