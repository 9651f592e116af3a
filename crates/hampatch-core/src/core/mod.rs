//! # Core Module
//!
//! Stateless building blocks of the patcher: matrix file I/O, validated matrix
//! models, and the tiling geometry.
//!
//! - **File I/O** ([`io`]) - Reading and writing whitespace-delimited numeric tables
//! - **Matrix Models** ([`models`]) - `Hamiltonian` and `ReplacementBlock` with shape validation
//! - **Tiling Geometry** ([`tiling`]) - The diagonal-shifted pattern of coupling sites
//!
//! Nothing in this module mutates a matrix; the substitution itself lives in
//! [`crate::engine`].

pub mod io;
pub mod models;
pub mod tiling;
