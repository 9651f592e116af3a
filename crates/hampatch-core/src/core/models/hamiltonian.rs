use nalgebra::DMatrix;
use thiserror::Error;

/// Smallest dimension that holds one full tiling block.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Source matrix must be square, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Source matrix dimension {dim} is smaller than the minimum of {min}")]
    TooSmall { dim: usize, min: usize },
    #[error("Source matrix dimension {dim} is odd; the tiling advances in steps of 2")]
    OddDimension { dim: usize },
    #[error("Replacement matrix must be at least 2x2, found {rows}x{cols}")]
    ReplacementTooSmall { rows: usize, cols: usize },
}

/// A square matrix of even dimension `N >= 4` whose off-diagonal couplings are
/// to be patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Hamiltonian {
    matrix: DMatrix<f64>,
}

impl Hamiltonian {
    pub fn new(matrix: DMatrix<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(ShapeError::NotSquare { rows, cols });
        }
        if rows < MIN_DIMENSION {
            return Err(ShapeError::TooSmall {
                dim: rows,
                min: MIN_DIMENSION,
            });
        }
        if rows % 2 != 0 {
            return Err(ShapeError::OddDimension { dim: rows });
        }
        Ok(Self { matrix })
    }

    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.matrix
    }

    /// Returns `true` if `|H[i,j] - H[j,i]| <= tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.dimension();
        (0..n).all(|i| {
            (i + 1..n).all(|j| (self.matrix[(i, j)] - self.matrix[(j, i)]).abs() <= tolerance)
        })
    }
}
