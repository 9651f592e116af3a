//! # Core Models Module
//!
//! Validated matrix types consumed by the patching engine.
//!
//! ## Key Components
//!
//! - [`hamiltonian`] - The square, even-dimensioned source matrix and the
//!   [`hamiltonian::ShapeError`] raised when an input does not qualify
//! - [`replacement`] - The 2x2 block of coupling values written into the source matrix
//!
//! Both types are built from raw `nalgebra::DMatrix<f64>` tables and reject
//! malformed shapes at construction, so downstream code never re-checks them.
//!
//! ```ignore
//! use hampatch::core::models::{hamiltonian::Hamiltonian, replacement::ReplacementBlock};
//!
//! let source = Hamiltonian::new(table)?;
//! let block = ReplacementBlock::from_table(&couplings)?;
//! ```

pub mod hamiltonian;
pub mod replacement;
