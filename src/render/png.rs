//! PNG output for rendered curves.
//!
//! Hands a pixel buffer to `image` as 8-bit RGB; framing, compression and
//! checksums are the encoder's business.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{DragonError, Result};

use super::PixelBuffer;

/// Write a pixel buffer to a PNG file.
///
/// # Arguments
///
/// * `buffer` - The pixels to write
/// * `path` - Output file path
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let img = to_image(buffer)?;

    img.save(path).map_err(|e| DragonError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Convert a pixel buffer to an `image` RGB buffer.
pub fn to_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(DragonError::Render {
            message: "Cannot encode an empty image".to_string(),
            help: Some("The curve produced a grid with no cells".to_string()),
        });
    }

    if let Some(row) = buffer.pixels().iter().position(|r| r.len() != buffer.width()) {
        return Err(DragonError::Render {
            message: format!(
                "Row {} has {} pixels, expected {}",
                row,
                buffer.pixels()[row].len(),
                buffer.width()
            ),
            help: None,
        });
    }

    let too_large = || DragonError::Render {
        message: format!(
            "Image of {} x {} pixels exceeds PNG limits",
            buffer.width(),
            buffer.height()
        ),
        help: Some("Lower iterations or stretch".to_string()),
    };
    let width = u32::try_from(buffer.width()).map_err(|_| too_large())?;
    let height = u32::try_from(buffer.height()).map_err(|_| too_large())?;

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (y, row) in buffer.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(colour.to_rgb()));
        }
    }

    Ok(img)
}
