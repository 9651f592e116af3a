use super::error::PatchError;
use crate::core::models::hamiltonian::Hamiltonian;
use crate::core::models::replacement::ReplacementBlock;
use crate::core::tiling::{Site, TilingPattern};
use nalgebra::DMatrix;
use tracing::{debug, trace};

/// Summary of one substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    pub dimension: usize,
    pub tiles: usize,
    /// Upper-triangle sites written; each one is mirrored, so twice as many
    /// entries change.
    pub sites: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    pub matrix: DMatrix<f64>,
    pub report: PatchReport,
}

/// Copies `source` and writes the replacement values at every site of
/// `pattern`, mirroring each write across the diagonal.
///
/// All sites and their replacement cells are bounds-checked before the copy
/// is touched, so an out-of-range pattern yields [`PatchError::IndexRange`]
/// or [`PatchError::ReplacementCell`] and no matrix.
pub fn apply_tiling(
    source: &Hamiltonian,
    replacement: &ReplacementBlock,
    pattern: &TilingPattern,
) -> Result<PatchResult, PatchError> {
    let dim = source.dimension();
    let sites: Vec<Site> = pattern.sites(dim).collect();

    if let Some(site) = sites.iter().find(|s| s.row >= dim || s.col >= dim) {
        return Err(PatchError::IndexRange {
            row: site.row,
            col: site.col,
            dim,
        });
    }
    if let Some(site) = sites.iter().find(|s| !ReplacementBlock::contains(s.source)) {
        return Err(PatchError::ReplacementCell {
            row: site.source.0,
            col: site.source.1,
        });
    }

    let mut matrix = source.matrix().clone();
    for site in &sites {
        let value = replacement.value(site.source);
        matrix[(site.row, site.col)] = value;
        matrix[site.mirrored()] = value;
        trace!(
            "Tile {}: ({}, {}) <- R{:?} = {}",
            site.tile, site.row, site.col, site.source, value
        );
    }

    let report = PatchReport {
        dimension: dim,
        tiles: pattern.tile_count(dim),
        sites: sites.len(),
    };
    debug!(
        "Patched {}x{} matrix: {} tile(s), {} coupling pair(s).",
        dim, dim, report.tiles, report.sites
    );
    Ok(PatchResult { matrix, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tiling::Offset;
    use nalgebra::Matrix2;
    use std::collections::HashSet;

    fn block() -> ReplacementBlock {
        ReplacementBlock::new(Matrix2::new(1.0, 2.0, 3.0, 4.0))
    }

    fn zeros(n: usize) -> Hamiltonian {
        Hamiltonian::new(DMatrix::zeros(n, n)).unwrap()
    }

    fn tiled_coords(n: usize) -> HashSet<(usize, usize)> {
        TilingPattern::default()
            .sites(n)
            .flat_map(|s| [(s.row, s.col), s.mirrored()])
            .collect()
    }

    #[test]
    fn base_block_is_written_symmetrically_for_n4() {
        let result = apply_tiling(&zeros(4), &block(), &TilingPattern::default()).unwrap();
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(4, 4, &[
            0.0, 0.0, 1.0, 2.0,
            0.0, 0.0, 3.0, 4.0,
            1.0, 3.0, 0.0, 0.0,
            2.0, 4.0, 0.0, 0.0,
        ]);
        assert_eq!(result.matrix, expected);
        assert_eq!(
            result.report,
            PatchReport {
                dimension: 4,
                tiles: 1,
                sites: 4
            }
        );
    }

    #[test]
    fn second_tile_is_written_for_n6() {
        let result = apply_tiling(&zeros(6), &block(), &TilingPattern::default()).unwrap();
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(6, 6, &[
            0.0, 0.0, 1.0, 2.0, 0.0, 0.0,
            0.0, 0.0, 3.0, 4.0, 0.0, 0.0,
            1.0, 3.0, 0.0, 0.0, 1.0, 2.0,
            2.0, 4.0, 0.0, 0.0, 3.0, 4.0,
            0.0, 0.0, 1.0, 3.0, 0.0, 0.0,
            0.0, 0.0, 2.0, 4.0, 0.0, 0.0,
        ]);
        assert_eq!(result.matrix, expected);
        assert_eq!(result.report.tiles, 2);
        assert_eq!(result.report.sites, 8);
    }

    #[test]
    fn untargeted_entries_are_copied_unchanged() {
        let source = DMatrix::from_fn(4, 4, |r, c| 10.0 * r as f64 + c as f64 + 0.5);
        let h = Hamiltonian::new(source.clone()).unwrap();
        let result = apply_tiling(&h, &block(), &TilingPattern::default()).unwrap();

        let tiled = tiled_coords(4);
        for r in 0..4 {
            for c in 0..4 {
                if !tiled.contains(&(r, c)) {
                    assert_eq!(result.matrix[(r, c)], source[(r, c)], "entry ({r}, {c})");
                }
            }
        }
        for i in 0..4 {
            assert_eq!(result.matrix[(i, i)], source[(i, i)]);
        }
    }

    #[test]
    fn shape_symmetry_and_copy_hold_across_sizes() {
        for n in (4..=16).step_by(2) {
            let source = DMatrix::from_fn(n, n, |r, c| (r * n + c) as f64 * 0.25 - 3.0);
            let h = Hamiltonian::new(source.clone()).unwrap();
            let result = apply_tiling(&h, &block(), &TilingPattern::default()).unwrap();
            assert_eq!(result.matrix.shape(), (n, n));

            let tiled = tiled_coords(n);
            assert_eq!(tiled.len(), 2 * 4 * (1 + (n - 4) / 2));
            assert_eq!(result.report.sites, 4 * (1 + (n - 4) / 2));

            for r in 0..n {
                for c in 0..n {
                    if tiled.contains(&(r, c)) {
                        assert_eq!(result.matrix[(r, c)], result.matrix[(c, r)]);
                    } else {
                        assert_eq!(result.matrix[(r, c)], source[(r, c)]);
                    }
                }
            }
        }
    }

    #[test]
    fn last_tile_reaches_final_rows() {
        let result = apply_tiling(&zeros(8), &block(), &TilingPattern::default()).unwrap();
        assert_eq!(result.matrix[(4, 6)], 1.0);
        assert_eq!(result.matrix[(5, 7)], 4.0);
        assert_eq!(result.matrix[(7, 5)], 4.0);
    }

    #[test]
    fn out_of_range_site_is_reported_without_writing() {
        let pattern = TilingPattern::new(
            vec![Offset {
                row: 0,
                col: 5,
                source: (0, 0),
            }],
            4,
            2,
        );
        let err = apply_tiling(&zeros(4), &block(), &pattern).unwrap_err();
        assert!(matches!(
            err,
            PatchError::IndexRange {
                row: 0,
                col: 5,
                dim: 4
            }
        ));
    }

    #[test]
    fn out_of_block_replacement_cell_is_an_error() {
        let pattern = TilingPattern::new(
            vec![Offset {
                row: 0,
                col: 2,
                source: (2, 0),
            }],
            4,
            2,
        );
        let err = apply_tiling(&zeros(4), &block(), &pattern).unwrap_err();
        assert!(matches!(
            err,
            PatchError::ReplacementCell { row: 2, col: 0 }
        ));
    }
}
