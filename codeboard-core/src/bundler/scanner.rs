//! Line-oriented scanner for reference blocks.
//!
//! A reference block is a banner line, a file-name line and a second banner
//! line, followed by a body that runs until the next banner line or the end
//! of the template:
//!
//! ```text
//! // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
//! // EngineCore.js
//! // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
//! ...stale body, regenerated from EngineCore.js...
//! ```
//!
//! The scanner never allocates copies of the template; every segment borrows
//! from it, and the segments tile the template exactly.

use std::ops::Range;

/// Comment leader shared by banner and file-name lines.
pub const COMMENT_PREFIX: &str = "// ";

/// Rules deciding which lines open a reference block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    extensions: Vec<String>,
    min_banner_tildes: usize,
}

impl ScanRules {
    pub fn new(extensions: Vec<String>, min_banner_tildes: usize) -> Self {
        Self {
            extensions,
            min_banner_tildes,
        }
    }

    /// True for `// ` followed only by at least `min_banner_tildes` tildes.
    pub fn is_banner(&self, line: &str) -> bool {
        line.strip_prefix(COMMENT_PREFIX).is_some_and(|rest| {
            rest.len() >= self.min_banner_tildes && rest.bytes().all(|b| b == b'~')
        })
    }

    /// File name carried by a `// <name>.<ext>` line, if any.
    pub fn file_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let name = line.strip_prefix(COMMENT_PREFIX)?;
        let known = self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .and_then(|stem| stem.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
        });
        known.then_some(name)
    }
}

/// A recognized reference block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceBlock<'a> {
    /// Name of the file whose contents replace the block
    pub file_name: &'a str,
    /// 1-based line number of the opening banner
    pub line: usize,
    /// Byte range of the block in the template, header and stale body included
    pub span: Range<usize>,
}

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged
    Literal(&'a str),
    /// Block regenerated from a referenced file
    Reference(ReferenceBlock<'a>),
}

struct Line<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    terminated: bool,
}

fn split_lines(template: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for raw in template.split_inclusive('\n') {
        let end = start + raw.len();
        let terminated = raw.ends_with('\n');
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(Line {
            start,
            end,
            text,
            terminated,
        });
        start = end;
    }
    lines
}

/// Splits `template` into literal text and reference blocks, in order.
pub fn scan<'a>(template: &'a str, rules: &ScanRules) -> Vec<Segment<'a>> {
    let lines = split_lines(template);
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i + 2 < lines.len() {
        let Some(file_name) = block_header(&lines[i..i + 3], rules) else {
            i += 1;
            continue;
        };

        let block_start = lines[i].start;
        let body_start = lines[i + 2].end;

        let next_banner = (i + 3..lines.len()).find(|&j| rules.is_banner(lines[j].text));
        let block_end = match next_banner {
            // Keep the newline in front of the next banner as literal text.
            Some(j) => lines[j].start.saturating_sub(1).max(body_start),
            None if template.ends_with('\n') => (template.len() - 1).max(body_start),
            None => template.len(),
        };

        if literal_start < block_start {
            segments.push(Segment::Literal(&template[literal_start..block_start]));
        }
        segments.push(Segment::Reference(ReferenceBlock {
            file_name,
            line: i + 1,
            span: block_start..block_end,
        }));

        literal_start = block_end;
        i = next_banner.unwrap_or(lines.len());
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    segments
}

fn block_header<'a>(header: &[Line<'a>], rules: &ScanRules) -> Option<&'a str> {
    if !header.iter().all(|line| line.terminated) {
        return None;
    }
    if !rules.is_banner(header[0].text) || !rules.is_banner(header[2].text) {
        return None;
    }
    rules.file_name(header[1].text)
}
