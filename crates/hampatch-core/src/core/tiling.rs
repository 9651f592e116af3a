//! Coordinates of the coupling entries overwritten in each tile.
//!
//! A tile is four `(row, col)` sites in the upper triangle, each paired with
//! the replacement cell that supplies its value. The first tile sits in the
//! leading 4x4 block; each following tile is the same pattern shifted down the
//! diagonal by `stride` rows and columns.

/// One site of the base tile and the replacement cell it draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub row: usize,
    pub col: usize,
    pub source: (usize, usize),
}

/// A concrete coordinate generated for a given matrix dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub tile: usize,
    pub row: usize,
    pub col: usize,
    pub source: (usize, usize),
}

impl Site {
    pub fn mirrored(&self) -> (usize, usize) {
        (self.col, self.row)
    }
}

const BASE_OFFSETS: [Offset; 4] = [
    Offset {
        row: 0,
        col: 2,
        source: (0, 0),
    },
    Offset {
        row: 0,
        col: 3,
        source: (0, 1),
    },
    Offset {
        row: 1,
        col: 2,
        source: (1, 0),
    },
    Offset {
        row: 1,
        col: 3,
        source: (1, 1),
    },
];
const BASE_BLOCK: usize = 4;
const DIAGONAL_STRIDE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingPattern {
    offsets: Vec<Offset>,
    block: usize,
    stride: usize,
}

impl Default for TilingPattern {
    fn default() -> Self {
        Self::new(BASE_OFFSETS.to_vec(), BASE_BLOCK, DIAGONAL_STRIDE)
    }
}

impl TilingPattern {
    /// `block` is the side of the square the base tile occupies. The tile is
    /// repeated, shifted by `stride`, for as long as the shifted block fits.
    pub fn new(offsets: Vec<Offset>, block: usize, stride: usize) -> Self {
        Self {
            offsets,
            block,
            stride,
        }
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of tiles placed on an `dimension x dimension` matrix:
    /// `1 + (dimension - block) / stride`, or zero if the base block does not fit.
    pub fn tile_count(&self, dimension: usize) -> usize {
        match dimension.checked_sub(self.block) {
            Some(slack) => 1 + slack.checked_div(self.stride).unwrap_or(0),
            None => 0,
        }
    }

    pub fn site_count(&self, dimension: usize) -> usize {
        self.tile_count(dimension) * self.offsets.len()
    }

    /// Sites in application order: tile by tile, base offsets in declared order.
    pub fn sites(&self, dimension: usize) -> impl Iterator<Item = Site> + '_ {
        (0..self.tile_count(dimension)).flat_map(move |tile| {
            let shift = tile * self.stride;
            self.offsets.iter().map(move |offset| Site {
                tile,
                row: offset.row + shift,
                col: offset.col + shift,
                source: offset.source,
            })
        })
    }
}
