//! # HamPatch Core Library
//!
//! Tiled replacement of off-diagonal couplings in Hamiltonian matrices, as used
//! when preparing diabatic model Hamiltonians.
//!
//! A square matrix `H` of even dimension is patched with the four values of a
//! 2x2 replacement block `R`: the block is written into the upper-right
//! quadrant of the leading 4x4 block of `H`, mirrored into the lower-left, and
//! the same pattern is repeated down the diagonal in steps of two.
//!
//! ## Layers
//!
//! - **[`core`]**: stateless matrix models, the tiling geometry and text-table I/O.
//! - **[`engine`]**: configuration, errors, and the pure [`engine::patcher::apply_tiling`] pass.
//! - **[`workflows`]**: file-to-file entry points built on the two layers above.

pub mod core;
pub mod engine;
pub mod workflows;
