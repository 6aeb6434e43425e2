//! Sixel encoder.
//!
//! Palette quantization and error diffusion are done by `icy_sixel`, which
//! picks up to 256 registers for the image instead of a fixed colour cube.
//! The sequence is wrapped in DECSC/DECRC so the cursor ends up where the
//! image started.

use icy_sixel::{sixel_encode, EncodeOptions};

use crate::artwork::{RasterImage, RenderError};

/// Save cursor.
const SAVE_CURSOR: &str = "\x1b7";
/// Restore cursor.
const RESTORE_CURSOR: &str = "\x1b8";

/// Encode `image` as a DCS sixel sequence that leaves the cursor in place.
pub fn encode(image: &RasterImage) -> Result<String, RenderError> {
    let (width, height) = image.dimensions();
    let sixel = sixel_encode(
        image.as_raw(),
        width as usize,
        height as usize,
        &EncodeOptions::default(),
    )
    .map_err(|e| RenderError::SixelEncode {
        reason: e.to_string(),
    })?;

    Ok(format!(
        "{}{}{}",
        SAVE_CURSOR,
        sixel.trim_end(),
        RESTORE_CURSOR
    ))
}
