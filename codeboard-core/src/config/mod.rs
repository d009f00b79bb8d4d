//! Configuration structures and constants for the codeboard-core library.
//!
//! The bundler reads a template, finds banner-delimited reference blocks and
//! inlines the named files. Everything that controls that process lives in
//! `BundleConfig`; the rasterizer needs no configuration beyond its input.

mod builder;

use std::path::PathBuf;

use crate::bundler::ScanRules;
use crate::error::{CoreError, CoreResult};
use crate::utils::parent_dir;

pub use builder::BundleConfigBuilder;

// Default constants

/// Template the engine bundle is generated from.
pub const DEFAULT_TEMPLATE_PATH: &str = "TemplateCodeboardEngine.js";

/// Generated engine bundle.
pub const DEFAULT_OUTPUT_PATH: &str = "CodeboardEngine.js";

/// Extensions a file-name line must end with to count as a reference.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// Minimum number of tildes on a banner line for it to be recognized.
/// Emitted banners are always wider than this.
pub const DEFAULT_MIN_BANNER_TILDES: usize = 30;

/// Configuration for a single bundling run.
///
/// # Examples
///
/// ```rust
/// use codeboard_core::config::BundleConfigBuilder;
///
/// let config = BundleConfigBuilder::new()
///     .template_path("engine/TemplateCodeboardEngine.js")
///     .output_path("engine/CodeboardEngine.js")
///     .extension("js")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Template containing reference blocks
    pub template_path: PathBuf,

    /// File the bundle is written to (created or truncated)
    pub output_path: PathBuf,

    /// Directory referenced file names are resolved against.
    /// Defaults to the template's directory.
    pub base_dir: Option<PathBuf>,

    /// Recognized source-file extensions, without the leading dot
    pub extensions: Vec<String>,

    /// Minimum tilde count for banner lines
    pub min_banner_tildes: usize,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_dir: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            min_banner_tildes: DEFAULT_MIN_BANNER_TILDES,
        }
    }
}

impl BundleConfig {
    /// Creates a configuration for the given template and output with
    /// default scanning rules.
    pub fn new(template_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Checks the configuration for values that cannot produce a bundle.
    pub fn validate(&self) -> CoreResult<()> {
        if self.template_path.as_os_str().is_empty() {
            return Err(CoreError::Config("template path is empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(CoreError::Config("output path is empty".to_string()));
        }
        if self.template_path == self.output_path {
            return Err(CoreError::Config(format!(
                "output path '{}' would overwrite the template",
                self.output_path.display()
            )));
        }
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one source extension is required".to_string(),
            ));
        }
        if self.extensions.iter().any(String::is_empty) {
            return Err(CoreError::Config("source extensions must not be empty".to_string()));
        }
        if self.min_banner_tildes == 0 {
            return Err(CoreError::Config(
                "banner lines need at least one tilde".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory that referenced names resolve against.
    pub fn effective_base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.clone(),
            None => parent_dir(&self.template_path),
        }
    }

    /// Scanning rules derived from this configuration.
    pub fn scan_rules(&self) -> ScanRules {
        ScanRules::new(self.extensions.clone(), self.min_banner_tildes)
    }
}
