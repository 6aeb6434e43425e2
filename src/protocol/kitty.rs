//! Kitty graphics protocol: base64 PNG sent in APC chunks.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::Protocol;
use crate::artwork::{CellSize, RasterImage, RenderError};

/// Maximum base64 bytes per escape sequence.
pub const CHUNK_SIZE: usize = 4096;

/// Transmit-and-display sequence for `image`, scaled to `cells`.
///
/// `C=1` keeps the cursor where the image starts, so text printed after
/// the sequence lands on the image's first row.
pub fn encode(image: &RasterImage, cells: CellSize) -> Result<String, RenderError> {
    let png = image.to_png().map_err(|source| RenderError::Encode {
        protocol: Protocol::Kitty,
        source,
    })?;
    let payload = STANDARD.encode(png);

    let mut out = String::with_capacity(payload.len() + payload.len() / CHUNK_SIZE * 16 + 64);
    let mut start = 0;
    while start < payload.len() {
        let end = (start + CHUNK_SIZE).min(payload.len());
        let more = u8::from(end < payload.len());
        if start == 0 {
            out.push_str(&format!(
                "\x1b_Ga=T,f=100,c={},r={},C=1,m={};",
                cells.width, cells.height, more
            ));
        } else {
            out.push_str(&format!("\x1b_Gm={};", more));
        }
        // base64 output is ASCII, so byte offsets are char boundaries.
        out.push_str(&payload[start..end]);
        out.push_str("\x1b\\");
        start = end;
    }
    Ok(out)
}
