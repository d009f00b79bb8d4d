// codeboard-cli/src/bin/image_to_matrix.rs
//
// Entry point for `image-to-matrix <image_path>`. Exactly one path is
// accepted; anything else prints the usage line on stdout and exits 1.

use codeboard_cli::cli::matrix_usage;
use codeboard_cli::error::{report_error, FAILURE_EXIT_CODE};
use codeboard_cli::logging;
use codeboard_cli::{run_matrix, MatrixInvocation};
use log::LevelFilter;
use std::process;

fn main() {
    let args = match MatrixInvocation::parse_from(std::env::args_os()) {
        MatrixInvocation::Run(args) => args,
        MatrixInvocation::Informational(e) => e.exit(),
        MatrixInvocation::Usage => {
            println!("{}", matrix_usage());
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    logging::init(logging::level_for(args.verbose, LevelFilter::Warn));

    if let Err(e) = run_matrix(args) {
        report_error(&e);
        process::exit(FAILURE_EXIT_CODE);
    }
}
