use super::hamiltonian::ShapeError;
use nalgebra::{DMatrix, Matrix2};
use tracing::warn;

/// The four coupling values written into every tile of the source matrix.
///
/// Cell `(r, c)` of the block supplies the value for base offset
/// `(r, c + 2)` of each tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplacementBlock {
    values: Matrix2<f64>,
}

impl ReplacementBlock {
    pub fn new(values: Matrix2<f64>) -> Self {
        Self { values }
    }

    /// Takes the leading 2x2 block of `table`. Larger tables are accepted and
    /// their remaining entries ignored.
    pub fn from_table(table: &DMatrix<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = table.shape();
        if rows < 2 || cols < 2 {
            return Err(ShapeError::ReplacementTooSmall { rows, cols });
        }
        if rows > 2 || cols > 2 {
            warn!(
                "Replacement matrix is {}x{}; only the leading 2x2 block is used.",
                rows, cols
            );
        }
        Ok(Self::new(table.fixed_view::<2, 2>(0, 0).into_owned()))
    }

    /// Whether `cell` addresses one of the four block entries.
    pub fn contains(cell: (usize, usize)) -> bool {
        cell.0 < 2 && cell.1 < 2
    }

    pub fn value(&self, cell: (usize, usize)) -> f64 {
        self.values[cell]
    }

    pub fn values(&self) -> &Matrix2<f64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_table_keeps_row_major_layout() {
        let table = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let block = ReplacementBlock::from_table(&table).unwrap();
        assert_eq!(block.value((0, 0)), 1.0);
        assert_eq!(block.value((0, 1)), 2.0);
        assert_eq!(block.value((1, 0)), 3.0);
        assert_eq!(block.value((1, 1)), 4.0);
    }

    #[test]
    fn larger_tables_use_leading_block() {
        let table = DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 9.0, 3.0, 4.0, 9.0, 9.0, 9.0, 9.0]);
        let block = ReplacementBlock::from_table(&table).unwrap();
        assert_eq!(block.values(), &Matrix2::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn contains_only_the_four_block_cells() {
        for cell in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(ReplacementBlock::contains(cell));
        }
        for cell in [(2, 0), (0, 2), (5, 5)] {
            assert!(!ReplacementBlock::contains(cell));
        }
    }

    #[test]
    fn rejects_tables_smaller_than_two_by_two() {
        for (rows, cols) in [(1, 2), (2, 1), (1, 1), (1, 4)] {
            let err = ReplacementBlock::from_table(&DMatrix::zeros(rows, cols)).unwrap_err();
            assert_eq!(err, ShapeError::ReplacementTooSmall { rows, cols });
        }
    }
}
