//! iTerm2 inline image protocol (OSC 1337).

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::Protocol;
use crate::artwork::{CellSize, RasterImage, RenderError};

/// Inline file sequence for `image`, sized in cells. The cursor stays put.
pub fn encode(image: &RasterImage, cells: CellSize) -> Result<String, RenderError> {
    let png = image.to_png().map_err(|source| RenderError::Encode {
        protocol: Protocol::Iterm2,
        source,
    })?;

    Ok(format!(
        "\x1b]1337;File=inline=1;size={};width={};height={};preserveAspectRatio=1;doNotMoveCursor=1:{}\x07",
        png.len(),
        cells.width,
        cells.height,
        STANDARD.encode(&png)
    ))
}
