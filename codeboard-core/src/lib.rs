//! Core library for the Codeboard engine tooling.
//!
//! This crate provides two independent transformations:
//!
//! - the bundler, which rewrites every banner-delimited reference block in a
//!   template with the current contents of the file it names, and
//! - the rasterizer, which turns an image into a 0/1 matrix from each
//!   pixel's first channel.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use codeboard_core::{bundle_template, load_matrix, BundleConfig};
//!
//! let config = BundleConfig::new("TemplateCodeboardEngine.js", "CodeboardEngine.js");
//! let report = bundle_template(&config).unwrap();
//! println!("inlined {} file(s)", report.inlined.len());
//!
//! let matrix = load_matrix("level.png").unwrap();
//! print!("{matrix}");
//! ```

pub mod bundler;
pub mod config;
pub mod error;
pub mod raster;
pub mod utils;

// Re-exports for public API
pub use bundler::{bundle_str, bundle_template, BundleReport, InlinedFile};
pub use config::{BundleConfig, BundleConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use raster::{load_matrix, BinaryMatrix};
pub use utils::format_bytes;
