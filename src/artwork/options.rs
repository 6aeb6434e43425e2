//! Per-render image settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::background::Background;
use super::fit::SizeOverrides;
use crate::protocol::ProtocolSetting;

/// Symbol vocabulary used by cell-based renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Detailed,
    Simple,
    Block,
    Ascii,
}

impl RenderMode {
    /// Value passed to `chafa --symbols`.
    pub fn chafa_symbols(self) -> &'static str {
        match self {
            RenderMode::Detailed => "all",
            RenderMode::Simple => "block+border",
            RenderMode::Block => "block",
            RenderMode::Ascii => "ascii",
        }
    }
}

/// Quantization pass applied before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMode {
    #[default]
    None,
    FloydSteinberg,
}

/// Settings for one image render. Immutable for the duration of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Image file, or a directory to pick a random image from.
    pub path: PathBuf,
    /// Requested width in cells, 0 for automatic.
    pub width: u16,
    /// Requested height in cells, 0 for automatic.
    pub height: u16,
    pub render_mode: RenderMode,
    pub dither_mode: DitherMode,
    pub protocol: ProtocolSetting,
    /// Multiplier for the bounding box, 0 for none.
    pub scale: u16,
    /// Distance from the window edge for overlay placement, in cells.
    pub offset: u16,
    /// `""`, `"transparent"` or a `#rrggbb` colour.
    pub background: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("~/.config/lunarfetch/images"),
            width: 0,
            height: 0,
            render_mode: RenderMode::default(),
            dither_mode: DitherMode::default(),
            protocol: ProtocolSetting::default(),
            scale: 1,
            offset: 2,
            background: String::new(),
        }
    }
}

impl ImageConfig {
    pub fn size_overrides(&self) -> SizeOverrides {
        SizeOverrides {
            width: self.width,
            height: self.height,
            scale: self.scale,
        }
    }

    /// Parsed background, or transparent when the value is invalid.
    pub fn background(&self) -> Background {
        match self.background.parse() {
            Ok(background) => background,
            Err(e) => {
                log::warn!("ignoring image background: {}", e);
                Background::Transparent
            }
        }
    }
}
