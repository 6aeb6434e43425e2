//! Encoders that shell out to an image-to-text tool.
//!
//! The prepared bitmap is written to a temporary PNG, the tool is run on it
//! and its stdout becomes the rendered block. The temporary file is removed
//! when the [`NamedTempFile`] drops, on success and failure alike.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use super::{EncodeContext, Protocol};
use crate::artwork::{RasterImage, RenderError};

/// Prefix for temporary image files handed to external tools.
pub const TEMP_PREFIX: &str = "lunarfetch-";

/// Render through `chafa --format symbols`.
pub fn chafa(image: &RasterImage, ctx: &EncodeContext) -> Result<String, RenderError> {
    let size = format!("{}x{}", ctx.cells.width, ctx.cells.height);
    let symbols = ctx.render_mode.chafa_symbols();
    run_tool("chafa", Protocol::Chafa, image, ctx, |path| {
        vec![
            "--format".into(),
            "symbols".into(),
            "--size".into(),
            size.into(),
            "--symbols".into(),
            symbols.into(),
            path.into(),
        ]
    })
}

/// Render through `terminal-image`.
pub fn terminal_image(image: &RasterImage, ctx: &EncodeContext) -> Result<String, RenderError> {
    let width = ctx.cells.width.to_string();
    let height = ctx.cells.height.to_string();
    run_tool(
        "terminal-image",
        Protocol::TerminalImage,
        image,
        ctx,
        |path| {
            vec![
                "--width".into(),
                width.into(),
                "--height".into(),
                height.into(),
                path.into(),
            ]
        },
    )
}

/// Write `image` to a fresh temporary PNG.
pub fn write_temp_png(
    tool: &'static str,
    protocol: Protocol,
    image: &RasterImage,
) -> Result<NamedTempFile, RenderError> {
    let png = image
        .to_png()
        .map_err(|source| RenderError::Encode { protocol, source })?;

    let mut file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".png")
        .tempfile()
        .map_err(|source| RenderError::TempFile { tool, source })?;
    file.write_all(&png)
        .and_then(|()| file.flush())
        .map_err(|source| RenderError::TempFile { tool, source })?;

    Ok(file)
}

fn run_tool<F>(
    tool: &'static str,
    protocol: Protocol,
    image: &RasterImage,
    ctx: &EncodeContext,
    args: F,
) -> Result<String, RenderError>
where
    F: FnOnce(&Path) -> Vec<std::ffi::OsString>,
{
    let binary = ctx
        .env
        .find_binary(tool)
        .ok_or(RenderError::ToolMissing { tool })?;

    let file = write_temp_png(tool, protocol, image)?;
    let args = args(file.path());
    log::debug!("running {} {:?}", binary.display(), args);

    let output = Command::new(&binary)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| RenderError::ToolExecution {
            tool,
            reason: e.to_string(),
        })?;
    drop(file);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            detail => format!("{}: {}", output.status, detail),
        };
        return Err(RenderError::ToolExecution { tool, reason });
    }

    let mut text = String::from_utf8(output.stdout).map_err(|_| RenderError::ToolExecution {
        tool,
        reason: "output is not valid UTF-8".to_string(),
    })?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
