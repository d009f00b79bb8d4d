// ============================================================================
// codeboard-cli/src/commands/bundle.rs
// ============================================================================
//
// BUNDLE COMMAND: Build the engine bundle from its template
//
// Turns BundleArgs into a validated BundleConfig, runs the core bundler and
// reports what was inlined.
//
// AI-ASSISTANT-INFO: Bundle command implementation

// ---- Internal crate imports ----
use crate::cli::BundleArgs;
use crate::error::CliResult;
use crate::output::print_bundle_report;

// ---- External crate imports ----
use codeboard_core::{bundle_template, BundleConfig, BundleConfigBuilder, BundleReport};
use log::{debug, info};

/// Builds the core configuration from parsed arguments.
pub fn config_from_args(args: &BundleArgs) -> BundleConfig {
    BundleConfigBuilder::new()
        .template_path(&args.template)
        .output_path(&args.output)
        .maybe_base_dir(args.base_dir.clone())
        .extensions(&args.extensions)
        .build()
}

/// Runs the bundle command.
pub fn run_bundle(args: BundleArgs) -> CliResult<BundleReport> {
    let config = config_from_args(&args);
    config.validate()?;
    debug!("Bundle configuration: {:?}", config);

    info!(
        "Bundling {} into {}",
        config.template_path.display(),
        config.output_path.display()
    );
    let report = bundle_template(&config)?;

    if !args.quiet {
        print_bundle_report(&report);
    }
    Ok(report)
}
