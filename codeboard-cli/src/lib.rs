// codeboard-cli/src/lib.rs
//
// Library portion of the Codeboard CLI binaries.
// Contains argument definitions and command logic shared by both binaries.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binaries or integration tests
pub use cli::{BundleArgs, MatrixArgs, MatrixInvocation};
pub use commands::bundle::run_bundle;
pub use commands::matrix::run_matrix;
