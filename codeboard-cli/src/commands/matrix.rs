// ============================================================================
// codeboard-cli/src/commands/matrix.rs
// ============================================================================
//
// MATRIX COMMAND: Print an image as a binary matrix
//
// Decodes the image through codeboard-core and writes one row per line to
// stdout. Nothing else is written to stdout.
//
// AI-ASSISTANT-INFO: Image-to-matrix command implementation

use crate::cli::MatrixArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::write_matrix;

use codeboard_core::load_matrix;
use log::debug;
use std::io::{self, BufWriter};

/// Runs the matrix command, writing rows to stdout.
pub fn run_matrix(args: MatrixArgs) -> CliResult<()> {
    let matrix = load_matrix(&args.image_path)?;
    debug!(
        "Printing {}x{} matrix for {}",
        matrix.height(),
        matrix.width(),
        args.image_path.display()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_matrix(&matrix, &mut out).cli_context("Failed to write matrix to stdout")
}
