//! # Workflows Module
//!
//! End-to-end entry points that connect file I/O with the patching engine.
//!
//! - **Replacement Workflow** ([`replace`]) - Read the source and replacement
//!   matrices, apply the tiling substitution, and write the patched matrix next
//!   to the source file.

pub mod replace;
