// ============================================================================
// codeboard-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for BundleConfig
//
// Fluent construction of BundleConfig. Unset fields fall back to the
// defaults in the parent module; extensions given with a leading dot are
// normalized.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for BundleConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::BundleConfig;

/// Builder for creating BundleConfig instances.
///
/// # Examples
///
/// ```rust
/// use codeboard_core::config::BundleConfigBuilder;
///
/// let config = BundleConfigBuilder::new()
///     .template_path("TemplateCodeboardEngine.js")
///     .output_path("CodeboardEngine.js")
///     .base_dir("engine")
///     .extensions([".js", "mjs"])
///     .min_banner_tildes(40)
///     .build();
/// assert_eq!(config.extensions, vec!["js".to_string(), "mjs".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundleConfigBuilder {
    template_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    extensions: Vec<String>,
    min_banner_tildes: Option<usize>,
}

impl BundleConfigBuilder {
    /// Creates a new BundleConfigBuilder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template path.
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Sets the output path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the directory referenced names are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Sets the base directory only when one is given.
    pub fn maybe_base_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.base_dir = dir;
        self
    }

    /// Adds one recognized extension.
    pub fn extension(mut self, ext: impl AsRef<str>) -> Self {
        self.extensions.push(normalize_extension(ext.as_ref()));
        self
    }

    /// Adds several recognized extensions.
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions
            .extend(exts.into_iter().map(|ext| normalize_extension(ext.as_ref())));
        self
    }

    /// Sets the minimum tilde count for banner lines.
    pub fn min_banner_tildes(mut self, count: usize) -> Self {
        self.min_banner_tildes = Some(count);
        self
    }

    /// Builds the configuration. Call `validate()` on the result before use.
    pub fn build(self) -> BundleConfig {
        let defaults = BundleConfig::default();
        BundleConfig {
            template_path: self.template_path.unwrap_or(defaults.template_path),
            output_path: self.output_path.unwrap_or(defaults.output_path),
            base_dir: self.base_dir,
            extensions: if self.extensions.is_empty() {
                defaults.extensions
            } else {
                self.extensions
            },
            min_banner_tildes: self.min_banner_tildes.unwrap_or(defaults.min_banner_tildes),
        }
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
