//! Output rendering for scanned templates.
//!
//! Literal segments are copied through untouched. Each reference block is
//! replaced by a freshly emitted banner, the referenced file's bytes, and a
//! single trailing newline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::scanner::{ReferenceBlock, Segment, COMMENT_PREFIX};
use crate::error::{CoreError, CoreResult};

/// Number of tildes on every emitted banner line.
pub const BANNER_WIDTH: usize = 64;

/// Header written in place of each reference block.
pub fn banner_header(file_name: &str) -> String {
    let tildes = "~".repeat(BANNER_WIDTH);
    format!("{COMMENT_PREFIX}{tildes}\n{COMMENT_PREFIX}{file_name}\n{COMMENT_PREFIX}{tildes}\n")
}

/// Supplies the contents of referenced files.
pub trait SourceProvider {
    /// Returns the full contents of `file_name`.
    fn fetch(&self, file_name: &str) -> CoreResult<Vec<u8>>;
}

/// Reads referenced files from disk, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsSourceProvider {
    base_dir: PathBuf,
}

impl FsSourceProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location a referenced name resolves to. Absolute names are used as-is.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }
}

impl SourceProvider for FsSourceProvider {
    fn fetch(&self, file_name: &str) -> CoreResult<Vec<u8>> {
        let path = self.resolve(file_name);
        debug!("Reading referenced file {}", path.display());
        fs::read(&path).map_err(|source| CoreError::ReferenceRead {
            name: file_name.to_string(),
            path,
            source,
        })
    }
}

/// A referenced file that was inlined into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedFile {
    /// Name as written in the template
    pub name: String,
    /// 1-based line of the block's opening banner in the template
    pub line: usize,
    /// Size of the inlined contents
    pub bytes: u64,
}

/// What a render pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    pub inlined: Vec<InlinedFile>,
    pub bytes_written: u64,
}

/// Streams the bundle for `segments` into `out`.
///
/// Output is written as segments are visited, so a failing fetch leaves
/// everything before the failing block in `out`.
pub fn write_bundle<S, W>(segments: &[Segment<'_>], sources: &S, out: &mut W) -> CoreResult<RenderOutcome>
where
    S: SourceProvider + ?Sized,
    W: Write + ?Sized,
{
    let mut outcome = RenderOutcome::default();

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                out.write_all(text.as_bytes())?;
                outcome.bytes_written += text.len() as u64;
            }
            Segment::Reference(block) => {
                let inlined = inline_block(block, sources, out)?;
                outcome.bytes_written += inlined.bytes + banner_len(block.file_name) + 1;
                outcome.inlined.push(inlined);
            }
        }
    }

    Ok(outcome)
}

fn inline_block<S, W>(block: &ReferenceBlock<'_>, sources: &S, out: &mut W) -> CoreResult<InlinedFile>
where
    S: SourceProvider + ?Sized,
    W: Write + ?Sized,
{
    let contents = sources.fetch(block.file_name)?;

    out.write_all(banner_header(block.file_name).as_bytes())?;
    out.write_all(&contents)?;
    out.write_all(b"\n")?;

    info!("Inlined {} ({} bytes)", block.file_name, contents.len());
    Ok(InlinedFile {
        name: block.file_name.to_string(),
        line: block.line,
        bytes: contents.len() as u64,
    })
}

fn banner_len(file_name: &str) -> u64 {
    // Three comment prefixes, two banners, the name and three newlines.
    (3 * COMMENT_PREFIX.len() + 2 * BANNER_WIDTH + file_name.len() + 3) as u64
}
