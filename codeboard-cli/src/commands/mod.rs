//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation behind one binary.

/// The `codeboard-bundle` command: inlines referenced engine sources.
pub mod bundle;

/// The `image-to-matrix` command: prints an image as a 0/1 matrix.
pub mod matrix;
