// codeboard-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use clap::error::ErrorKind;
use codeboard_core::config::{DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_PATH};
use std::ffi::OsString;
use std::path::PathBuf;

/// Binary name of the rasterizer, used in its usage line.
pub const MATRIX_BIN_NAME: &str = "image-to-matrix";

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "codeboard-bundle",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Codeboard: inline engine sources into a template",
    long_about = "Rewrites every banner-delimited reference block in TEMPLATE with the \
                  current contents of the file it names and writes the result to OUTPUT."
)]
pub struct BundleArgs {
    /// Template containing reference blocks
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// File the bundle is written to (created or truncated)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Optional: Directory referenced files are resolved against (defaults to the template's directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Source-file extensions that mark a reference (repeatable or comma-separated)
    #[arg(short = 'e', long = "extension", value_name = "EXT", value_delimiter = ',', default_value = "js")]
    pub extensions: Vec<String>,

    /// Suppress the per-file listing and summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable detailed logging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = MATRIX_BIN_NAME,
    author,
    version,
    about = "Codeboard: print an image as a 0/1 matrix",
    long_about = "Prints one line per pixel row; a cell is 1 when the pixel's first channel is non-zero."
)]
pub struct MatrixArgs {
    /// Image to convert
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,

    /// Enable detailed logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of parsing the rasterizer's command line.
#[derive(Debug)]
pub enum MatrixInvocation {
    /// Arguments were valid
    Run(MatrixArgs),
    /// `--help` or `--version`; clap prints and exits successfully
    Informational(clap::Error),
    /// Wrong argument count or unknown flag
    Usage,
}

impl MatrixInvocation {
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match MatrixArgs::try_parse_from(args) {
            Ok(args) => Self::Run(args),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Self::Informational(e)
            }
            Err(_) => Self::Usage,
        }
    }
}

/// One-line usage printed when the rasterizer gets the wrong arguments.
pub fn matrix_usage() -> String {
    format!("Usage: {MATRIX_BIN_NAME} <image_path>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bundle_defaults() {
        let args = BundleArgs::parse_from(["codeboard-bundle"]);
        assert_eq!(args.template, PathBuf::from("TemplateCodeboardEngine.js"));
        assert_eq!(args.output, PathBuf::from("CodeboardEngine.js"));
        assert!(args.base_dir.is_none());
        assert_eq!(args.extensions, vec!["js".to_string()]);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_bundle_positional_and_flags() {
        let args = BundleArgs::parse_from([
            "codeboard-bundle",
            "in/Template.js",
            "out/Engine.js",
            "--base-dir",
            "src",
            "-e",
            "js,mjs",
            "--extension",
            "ts",
            "--quiet",
        ]);
        assert_eq!(args.template, PathBuf::from("in/Template.js"));
        assert_eq!(args.output, PathBuf::from("out/Engine.js"));
        assert_eq!(args.base_dir, Some(PathBuf::from("src")));
        assert_eq!(args.extensions, vec!["js", "mjs", "ts"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_bundle_quiet_conflicts_with_verbose() {
        let result = BundleArgs::try_parse_from(["codeboard-bundle", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_matrix_invocation_single_path() {
        match MatrixInvocation::parse_from(["image-to-matrix", "level.png"]) {
            MatrixInvocation::Run(args) => {
                assert_eq!(args.image_path, PathBuf::from("level.png"));
                assert!(!args.verbose);
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_matrix_invocation_wrong_counts() {
        assert!(matches!(
            MatrixInvocation::parse_from(["image-to-matrix"]),
            MatrixInvocation::Usage
        ));
        assert!(matches!(
            MatrixInvocation::parse_from(["image-to-matrix", "a.png", "b.png"]),
            MatrixInvocation::Usage
        ));
    }

    #[test]
    fn test_matrix_invocation_help() {
        assert!(matches!(
            MatrixInvocation::parse_from(["image-to-matrix", "--help"]),
            MatrixInvocation::Informational(_)
        ));
    }

    #[test]
    fn test_matrix_usage_line() {
        assert_eq!(matrix_usage(), "Usage: image-to-matrix <image_path>");
    }
}
