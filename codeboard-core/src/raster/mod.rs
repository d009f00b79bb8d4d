//! Image to binary matrix conversion.
//!
//! Each pixel becomes one cell: 1 when the pixel's first channel is
//! non-zero, 0 otherwise. The first channel is whatever the decoded format
//! stores first (luma for grayscale, red for RGB), read at its native depth.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageReader, Pixel};
use log::debug;

use crate::error::{CoreError, CoreResult};

/// A height x width grid of 0/1 cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// Builds the matrix for a decoded image.
    pub fn from_image(image: &DynamicImage) -> Self {
        let cells = match image {
            DynamicImage::ImageLuma8(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageLumaA8(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageRgb8(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageRgba8(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageLuma16(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageLumaA16(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageRgb16(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageRgba16(buf) => first_channel_mask(buf, |v| v != 0),
            DynamicImage::ImageRgb32F(buf) => first_channel_mask(buf, |v| v != 0.0),
            DynamicImage::ImageRgba32F(buf) => first_channel_mask(buf, |v| v != 0.0),
            other => first_channel_mask(&other.to_rgba8(), |v| v != 0),
        };

        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (`row`, `col`), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Rows from top to bottom, each exactly `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Copies the grid into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

/// Renders one row as a literal sequence, e.g. `[0, 1, 1]`.
pub fn format_row(row: &[u8]) -> String {
    let cells: Vec<String> = row.iter().map(u8::to_string).collect();
    format!("[{}]", cells.join(", "))
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", format_row(row))?;
        }
        Ok(())
    }
}

fn first_channel_mask<P, F>(buf: &ImageBuffer<P, Vec<P::Subpixel>>, nonzero: F) -> Vec<u8>
where
    P: Pixel,
    F: Fn(P::Subpixel) -> bool,
{
    buf.pixels()
        .map(|pixel| u8::from(nonzero(pixel.channels()[0])))
        .collect()
}

/// Decodes the image at `path` and converts it to a binary matrix.
///
/// The format is sniffed from the file contents, falling back to the
/// extension when the contents are not recognized.
pub fn load_matrix(path: impl AsRef<Path>) -> CoreResult<BinaryMatrix> {
    let path = path.as_ref();
    let decode_error = |source| CoreError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(BinaryMatrix::from_image(&decoded))
}
