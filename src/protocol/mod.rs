//! Terminal image display protocols.
//!
//! Each [`Protocol`] turns a prepared bitmap into output the terminal can
//! show. Sixel, kitty and iTerm2 are encoded in-process. Chafa and
//! terminal-image shell out to the tool of the same name and return its
//! text output. Ueberzug draws an overlay from a detached child process and
//! produces no text at all.

mod detect;
mod env;
mod external;
mod iterm2;
mod kitty;
mod sixel;
mod ueberzug;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::artwork::{CellSize, RasterImage, RenderError, RenderMode};
use crate::terminal::TerminalGeometry;

pub use detect::{candidates, detect, Signal, DETECTION_ORDER};
pub use env::{find_in_path, Environment, StaticEnvironment, SystemEnvironment};
pub use ueberzug::{DetachedOverlay, OVERLAY_IDENTIFIER};

/// A concrete display protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Sixel,
    Kitty,
    Iterm2,
    Chafa,
    Ueberzug,
    TerminalImage,
}

impl Protocol {
    pub const ALL: [Protocol; 6] = [
        Protocol::Sixel,
        Protocol::Kitty,
        Protocol::Iterm2,
        Protocol::Chafa,
        Protocol::Ueberzug,
        Protocol::TerminalImage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Protocol::Sixel => "sixel",
            Protocol::Kitty => "kitty",
            Protocol::Iterm2 => "iterm2",
            Protocol::Chafa => "chafa",
            Protocol::Ueberzug => "ueberzug",
            Protocol::TerminalImage => "terminal-image",
        }
    }

    /// Encode `image` with this protocol.
    pub fn encode(self, image: &RasterImage, ctx: &EncodeContext) -> Result<Rendered, RenderError> {
        match self {
            Protocol::Sixel => sixel::encode(image).map(|p| Rendered::pixels(p, ctx.cells)),
            Protocol::Kitty => {
                kitty::encode(image, ctx.cells).map(|p| Rendered::pixels(p, ctx.cells))
            }
            Protocol::Iterm2 => {
                iterm2::encode(image, ctx.cells).map(|p| Rendered::pixels(p, ctx.cells))
            }
            Protocol::Chafa => external::chafa(image, ctx).map(Rendered::Inline),
            Protocol::TerminalImage => external::terminal_image(image, ctx).map(Rendered::Inline),
            Protocol::Ueberzug => ueberzug::launch(image, ctx).map(Rendered::Detached),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The configured protocol: a fixed one, or auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolSetting {
    #[default]
    Auto,
    Sixel,
    Kitty,
    Iterm2,
    Chafa,
    #[serde(alias = "uberzug")]
    Ueberzug,
    TerminalImage,
}

impl ProtocolSetting {
    /// The protocol this setting pins, or `None` for auto-detection.
    pub fn fixed(self) -> Option<Protocol> {
        match self {
            ProtocolSetting::Auto => None,
            ProtocolSetting::Sixel => Some(Protocol::Sixel),
            ProtocolSetting::Kitty => Some(Protocol::Kitty),
            ProtocolSetting::Iterm2 => Some(Protocol::Iterm2),
            ProtocolSetting::Chafa => Some(Protocol::Chafa),
            ProtocolSetting::Ueberzug => Some(Protocol::Ueberzug),
            ProtocolSetting::TerminalImage => Some(Protocol::TerminalImage),
        }
    }
}

/// Everything an encoder needs besides the bitmap.
pub struct EncodeContext<'a> {
    /// Cell area the image was fitted to.
    pub cells: CellSize,
    pub geometry: TerminalGeometry,
    pub render_mode: RenderMode,
    /// Overlay distance from the window edge, in cells.
    pub offset: u16,
    pub env: &'a dyn Environment,
}

/// The result of encoding.
#[derive(Debug)]
pub enum Rendered {
    /// Text to print as part of the output.
    Inline(String),
    /// A graphics sequence that draws over `cells` and leaves the cursor
    /// where it started. The payload itself has no text width.
    Pixels { payload: String, cells: CellSize },
    /// An overlay drawn by a child process; contributes no text.
    Detached(DetachedOverlay),
}

impl Rendered {
    fn pixels(payload: String, cells: CellSize) -> Self {
        Rendered::Pixels { payload, cells }
    }

    /// The in-band text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Rendered::Inline(text) => Some(text),
            Rendered::Pixels { payload, .. } => Some(payload),
            Rendered::Detached(_) => None,
        }
    }

    /// Cells the output covers on screen, for pixel graphics.
    pub fn footprint(&self) -> Option<CellSize> {
        match self {
            Rendered::Pixels { cells, .. } => Some(*cells),
            _ => None,
        }
    }
}

/// Encode `image` according to `setting`.
///
/// A fixed protocol is used as-is and its failure is returned unchanged.
/// `Auto` tries every detected protocol in priority order and returns the
/// first success.
///
/// # Returns
/// The protocol that produced the output, and the output itself.
///
/// # Errors
/// `ProtocolUnavailable` when auto-detection finds nothing, otherwise the
/// error of the last protocol tried.
pub fn encode(
    setting: ProtocolSetting,
    image: &RasterImage,
    ctx: &EncodeContext,
) -> Result<(Protocol, Rendered), RenderError> {
    if let Some(protocol) = setting.fixed() {
        return protocol.encode(image, ctx).map(|r| (protocol, r));
    }

    let mut last_error = None;
    for protocol in candidates(ctx.env) {
        match protocol.encode(image, ctx) {
            Ok(rendered) => return Ok((protocol, rendered)),
            Err(e) => {
                log::debug!("{} failed, trying next protocol: {}", protocol, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(RenderError::ProtocolUnavailable))
}
