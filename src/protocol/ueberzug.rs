//! Ueberzug overlays.
//!
//! Ueberzug draws on top of the terminal window instead of printing text,
//! so the overlay lives in a detached `sh` child: it feeds an `add` command
//! to `ueberzug layer`, waits, sends `remove`, then deletes the image file.
//! The caller gets a handle to that child and an empty text block.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use serde_json::json;

use super::external::write_temp_png;
use super::{EncodeContext, Protocol};
use crate::artwork::{RasterImage, RenderError};

/// Identifier ueberzug tracks the overlay under.
pub const OVERLAY_IDENTIFIER: &str = "lunarfetch";
/// How long the overlay stays on screen.
pub const DISPLAY_SECONDS: u32 = 5;

const OVERLAY_SCRIPT: &str = r#"{ printf '%s\n' "$2"; sleep "$4"; printf '%s\n' "$3"; } | "$5" layer --parser json; rm -f -- "$1""#;

/// A running overlay process.
#[derive(Debug)]
pub struct DetachedOverlay {
    pub identifier: String,
    /// Column the overlay is anchored at.
    pub x: u16,
    /// Row the overlay is anchored at.
    pub y: u16,
    pub child: Child,
}

impl DetachedOverlay {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }
}

/// Show `image` as an ueberzug overlay.
pub fn launch(image: &RasterImage, ctx: &EncodeContext) -> Result<DetachedOverlay, RenderError> {
    launch_for(image, ctx, DISPLAY_SECONDS)
}

/// Overlay anchor: `offset` cells from the top-left, at least 1, kept on screen.
pub fn position(offset: u16, columns: u16, rows: u16) -> (u16, u16) {
    let anchor = offset.max(1);
    (
        anchor.min(columns.saturating_sub(1).max(1)),
        anchor.min(rows.saturating_sub(1).max(1)),
    )
}

fn launch_for(
    image: &RasterImage,
    ctx: &EncodeContext,
    seconds: u32,
) -> Result<DetachedOverlay, RenderError> {
    const TOOL: &str = "ueberzug";

    let ueberzug = ctx
        .env
        .find_binary(TOOL)
        .ok_or(RenderError::ToolMissing { tool: TOOL })?;
    let shell = ctx
        .env
        .find_binary("sh")
        .ok_or(RenderError::ToolMissing { tool: "sh" })?;

    // The child deletes the file once the overlay is removed.
    let path = write_temp_png(TOOL, Protocol::Ueberzug, image)?
        .into_temp_path()
        .keep()
        .map_err(|e| RenderError::TempFile {
            tool: TOOL,
            source: e.error,
        })?;

    let (x, y) = position(ctx.offset, ctx.geometry.columns, ctx.geometry.rows);
    let (add, remove) = commands(&path, x, y, ctx.cells.width, ctx.cells.height);

    let spawned = Command::new(&shell)
        .arg("-c")
        .arg(OVERLAY_SCRIPT)
        .arg("lunarfetch-overlay")
        .arg(&path)
        .arg(add.to_string())
        .arg(remove.to_string())
        .arg(seconds.to_string())
        .arg(&ueberzug)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(child) => {
            log::debug!("ueberzug overlay at {},{} (pid {})", x, y, child.id());
            Ok(DetachedOverlay {
                identifier: OVERLAY_IDENTIFIER.to_string(),
                x,
                y,
                child,
            })
        }
        Err(e) => {
            let _ = std::fs::remove_file(&path);
            Err(RenderError::ToolExecution {
                tool: TOOL,
                reason: e.to_string(),
            })
        }
    }
}

/// The `add` and `remove` layer commands for one overlay.
fn commands(
    path: &Path,
    x: u16,
    y: u16,
    max_width: u16,
    max_height: u16,
) -> (serde_json::Value, serde_json::Value) {
    let add = json!({
        "action": "add",
        "identifier": OVERLAY_IDENTIFIER,
        "x": x,
        "y": y,
        "path": path.to_string_lossy(),
        "max_width": max_width,
        "max_height": max_height,
    });
    let remove = json!({
        "action": "remove",
        "identifier": OVERLAY_IDENTIFIER,
    });
    (add, remove)
}
