use thiserror::Error;

use crate::core::io::table::TableError;
use crate::core::models::hamiltonian::ShapeError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Cannot read input file '{path}': {source}", path = path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed numeric table in '{path}': {source}", path = path.display())]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Invalid matrix shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Tiled site ({row}, {col}) lies outside the {dim}x{dim} matrix")]
    IndexRange { row: usize, col: usize, dim: usize },

    #[error("Replacement cell ({row}, {col}) lies outside the 2x2 replacement block")]
    ReplacementCell { row: usize, col: usize },

    #[error("Failed to write output file '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}
