//! Failure taxonomy for producing a rendered block.

use std::path::PathBuf;

use crate::protocol::Protocol;

/// Errors that can occur while rendering an image or logo block.
///
/// Every variant is a reported result; nothing in the rendering path
/// terminates the process. Callers decide whether to log the failure and
/// omit the block.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot access '{}': {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no {kind} files found in '{}'", dir.display())]
    NoCandidates { dir: PathBuf, kind: &'static str },

    #[error("{tool} is not installed")]
    ToolMissing { tool: &'static str },

    #[error("{tool} failed: {reason}")]
    ToolExecution { tool: &'static str, reason: String },

    #[error("cannot write temporary file for {tool}: {source}")]
    TempFile {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode image for {protocol}: {source}")]
    Encode {
        protocol: Protocol,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode sixel image: {reason}")]
    SixelEncode { reason: String },

    #[error("no suitable image display protocol detected")]
    ProtocolUnavailable,
}
