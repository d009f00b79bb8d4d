// codeboard-cli/src/bin/bundle.rs
//
// Entry point for `codeboard-bundle`: parses arguments, sets up logging and
// runs the bundle command. Any failure prints `Error: ...` and exits 1.

use clap::Parser;
use codeboard_cli::error::{report_error, FAILURE_EXIT_CODE};
use codeboard_cli::logging;
use codeboard_cli::{run_bundle, BundleArgs};
use log::LevelFilter;
use std::process;

fn main() {
    let args = BundleArgs::parse();
    logging::init(logging::level_for(args.verbose, LevelFilter::Info));

    if let Err(e) = run_bundle(args) {
        report_error(&e);
        process::exit(FAILURE_EXIT_CODE);
    }
}
