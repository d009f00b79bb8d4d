// ============================================================================
// codeboard-core/src/bundler/mod.rs
// ============================================================================
//
// BUNDLER: Inline referenced engine sources into a template
//
// The template marks each engine source with a banner-delimited reference
// block. Bundling rewrites every block with the current contents of the file
// it names and leaves all other template text untouched.
//
// KEY COMPONENTS:
// - scanner: line-oriented detection of reference blocks
// - render: banner emission and source fetching
// - bundle_template: file-to-file bundling run
//
// AI-ASSISTANT-INFO: Template bundler for the Codeboard engine

pub mod render;
pub mod scanner;

// ---- Standard library imports ----
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

// ---- External crate imports ----
use log::{debug, info};

// ---- Internal crate imports ----
use crate::config::BundleConfig;
use crate::error::{CoreError, CoreResult};

pub use render::{
    banner_header, write_bundle, FsSourceProvider, InlinedFile, RenderOutcome, SourceProvider,
    BANNER_WIDTH,
};
pub use scanner::{scan, ReferenceBlock, ScanRules, Segment};

/// Result of a bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Inlined files in template order
    pub inlined: Vec<InlinedFile>,
    pub bytes_written: u64,
}

/// Bundles a template held in memory.
pub fn bundle_str<S>(template: &str, rules: &ScanRules, sources: &S) -> CoreResult<Vec<u8>>
where
    S: SourceProvider + ?Sized,
{
    let segments = scan(template, rules);
    let mut out = Vec::with_capacity(template.len());
    write_bundle(&segments, sources, &mut out)?;
    Ok(out)
}

/// Reads `config.template_path`, inlines every reference block and writes
/// the result to `config.output_path`.
///
/// The template is read completely before the output is touched. The output
/// is then written in place as the template is walked; if a referenced file
/// cannot be read the output keeps whatever was written before it.
///
/// # Examples
///
/// ```rust,no_run
/// use codeboard_core::{bundle_template, BundleConfig};
///
/// let config = BundleConfig::new("TemplateCodeboardEngine.js", "CodeboardEngine.js");
/// let report = bundle_template(&config).unwrap();
/// for file in &report.inlined {
///     println!("{}", file.name);
/// }
/// ```
pub fn bundle_template(config: &BundleConfig) -> CoreResult<BundleReport> {
    config.validate()?;

    let template =
        fs::read_to_string(&config.template_path).map_err(|source| CoreError::TemplateRead {
            path: config.template_path.clone(),
            source,
        })?;

    let segments = scan(&template, &config.scan_rules());
    debug!(
        "Scanned {} into {} segment(s)",
        config.template_path.display(),
        segments.len()
    );

    let sources = FsSourceProvider::new(config.effective_base_dir());
    let output_error = |source| CoreError::OutputWrite {
        path: config.output_path.clone(),
        source,
    };

    let file = File::create(&config.output_path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);

    // Dropping the writer on error flushes the partial output.
    let outcome = write_bundle(&segments, &sources, &mut writer).map_err(|e| match e {
        CoreError::Io(source) => output_error(source),
        other => other,
    })?;
    writer.flush().map_err(output_error)?;

    info!(
        "Wrote {} ({} file(s) inlined)",
        config.output_path.display(),
        outcome.inlined.len()
    );

    Ok(BundleReport {
        template_path: config.template_path.clone(),
        output_path: config.output_path.clone(),
        inlined: outcome.inlined,
        bytes_written: outcome.bytes_written,
    })
}
