//! Terminal output helpers.
//!
//! Styling goes through `console`, which drops colors automatically when
//! stdout is not a terminal.

use codeboard_core::{format_bytes, BinaryMatrix, BundleReport};
use codeboard_core::raster::format_row;
use console::style;
use std::fmt::Display;
use std::io::{self, Write};

/// Print an info line with label and value, with the label styled
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

/// Print one line per inlined file followed by a short summary
pub fn print_bundle_report(report: &BundleReport) {
    for file in &report.inlined {
        println!(
            "{} {} {}",
            style("Inlined").green(),
            style(&file.name).bold(),
            style(format!("(line {}, {})", file.line, format_bytes(file.bytes))).dim()
        );
    }

    if report.inlined.is_empty() {
        println!(
            "{}",
            style("No reference blocks found; template copied unchanged.").yellow()
        );
    }

    print_info("Template", report.template_path.display());
    print_info(
        "Output",
        format!(
            "{} ({})",
            report.output_path.display(),
            format_bytes(report.bytes_written)
        ),
    );
}

/// Writes matrix rows, one per line, without any styling.
pub fn write_matrix<W: Write>(matrix: &BinaryMatrix, out: &mut W) -> io::Result<()> {
    for row in matrix.rows() {
        writeln!(out, "{}", format_row(row))?;
    }
    out.flush()
}
