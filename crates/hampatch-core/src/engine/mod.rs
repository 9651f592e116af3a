//! # Engine Module
//!
//! The substitution pass and everything it needs to run: configuration of the
//! output, the error taxonomy, and the pure patching function.
//!
//! - **Configuration** ([`config`]) - Output naming and number formatting, with a validating builder
//! - **Error Handling** ([`error`]) - [`error::PatchError`], the single error type of the library
//! - **Patching** ([`patcher`]) - [`patcher::apply_tiling`], matrix in, patched matrix and report out
//!
//! The engine performs no I/O. File handling is the job of [`crate::workflows`].

pub mod config;
pub mod error;
pub mod patcher;
