//! Decoded pixel buffers.

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::error::RenderError;

/// An RGBA bitmap flowing through the render pipeline.
///
/// Pipeline stages take `&RasterImage` and return a new one; the input is
/// never modified in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::new(image.into_rgba8())
    }

    /// Read and decode a PNG, JPEG or WEBP file.
    ///
    /// The container format is guessed from the file contents.
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path).map_err(|source| RenderError::Path {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&bytes).map_err(|source| RenderError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_dynamic(image))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Encode as a PNG container.
    pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
