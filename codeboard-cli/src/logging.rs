// ============================================================================
// codeboard-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup shared by both binaries
//
// Logs go to stderr so stdout stays reserved for command output (the
// rasterizer's matrix rows in particular).
//
// USAGE:
// The level can be overridden with the RUST_LOG environment variable:
// - RUST_LOG=info: Normal operation logs
// - RUST_LOG=debug: Detailed debugging information
// - RUST_LOG=trace: Very verbose debugging information
//
// AI-ASSISTANT-INFO: Logger initialization for the CLI binaries

use console::style;
use log::{Level, LevelFilter};
use std::io::Write;

/// Picks the level for a run: `Debug` when verbose, `default` otherwise.
pub fn level_for(verbose: bool, default: LevelFilter) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { default }
}

/// Initialize the logger. `RUST_LOG` takes precedence over `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN ").yellow(),
                Level::Info => style("INFO ").green(),
                Level::Debug => style("DEBUG").blue(),
                Level::Trace => style("TRACE").magenta(),
            };
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp(),
                level.for_stderr(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", level);
    }
}
