// ============================================================================
// codeboard-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the core library
//
// Every fallible operation in codeboard-core returns `CoreResult<T>`. File
// access failures carry the path that failed so the CLI can report them
// without extra context.
//
// AI-ASSISTANT-INFO: Core error enum and result alias

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::path::PathBuf;

/// Errors produced by the bundler and the rasterizer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read template '{}': {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read referenced file '{name}' ({}): {source}", path.display())]
    ReferenceRead {
        name: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image '{}': {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for codeboard-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
