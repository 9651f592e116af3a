//! Provides input/output functionality for matrix text files.
//!
//! Matrices are exchanged as plain whitespace-delimited tables, one row per
//! line. The [`traits::MatrixFile`] trait gives a uniform reader/writer
//! interface and [`table::TextTableFile`] implements it for the text format.

pub mod table;
pub mod traits;
