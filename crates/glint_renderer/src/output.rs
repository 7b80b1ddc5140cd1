//! Writing rendered images to disk.
//!
//! The native format is plain-text PPM (`P3`), written channel values as-is.
//! Anything else goes through the `image` crate, which needs 8-bit
//! channels, so out-of-range values are saturated there.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write `buffer` as a plain-text PPM.
///
/// Header `P3`, then `width height`, then `255`, then one `R G B` line per
/// pixel in row-major order. Channels are not clamped.
pub fn write_ppm<W: Write>(buffer: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width, buffer.height)?;
    writeln!(writer, "255")?;

    for color in buffer.pixels() {
        writeln!(writer, "{} {} {}", color.red, color.green, color.blue)?;
    }

    writer.flush()
}

/// Save `buffer` as a plain-text PPM file.
pub fn save_ppm<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> OutputResult<()> {
    let file = File::create(path)?;
    write_ppm(buffer, BufWriter::new(file))?;
    Ok(())
}

/// Convert to an 8-bit RGB image, saturating each channel.
pub fn to_rgb_image(buffer: &ImageBuffer) -> image::RgbImage {
    image::RgbImage::from_fn(buffer.width, buffer.height, |x, y| {
        image::Rgb(buffer.get(x, y).clamped_rgb())
    })
}

/// Save `buffer` in whatever format the `image` crate picks from the
/// path's extension.
pub fn save_image<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> OutputResult<()> {
    to_rgb_image(buffer).save(path)?;
    Ok(())
}

/// Save `buffer` to `path`: `.ppm` as plain-text PPM, anything else via
/// the `image` crate.
pub fn save<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        save_ppm(buffer, path)?;
    } else {
        save_image(buffer, path)?;
    }

    log::info!("Saved {}x{} image to {}", buffer.width, buffer.height, path.display());
    Ok(())
}
