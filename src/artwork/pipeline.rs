//! The image render pipeline: resolve, decode, fit, resize, dither, encode.
//!
//! Runs synchronously on the calling thread. Every stage returns a new
//! raster; the decoded source is never modified.

use rand::Rng;

use super::background;
use super::dither;
use super::error::RenderError;
use super::fit::{fit_dimensions, CellSize};
use super::options::ImageConfig;
use super::raster::RasterImage;
use super::resize::{covered_cells, pixel_target, resize_to_fit};
use super::source::resolve_source;
use crate::protocol::{self, EncodeContext, Environment, Rendered};
use crate::terminal::TerminalGeometry;

/// A bitmap ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    pub raster: RasterImage,
    /// Bounding box the image was fitted into.
    pub fitted: CellSize,
    /// Cells the resized raster covers. Never larger than `fitted`.
    pub cells: CellSize,
}

/// Fit, resize, flatten and dither a decoded image.
pub fn prepare(
    source: &RasterImage,
    config: &ImageConfig,
    geometry: TerminalGeometry,
) -> PreparedImage {
    let fitted = fit_dimensions(
        source.width(),
        source.height(),
        geometry,
        config.size_overrides(),
    );
    let target = pixel_target(fitted, geometry.cell_size());
    log::debug!(
        "fitted {}x{} image to {}x{} cells ({}x{} px) on a {}x{} terminal",
        source.width(),
        source.height(),
        fitted.width,
        fitted.height,
        target.0,
        target.1,
        geometry.columns,
        geometry.rows
    );

    let resized = resize_to_fit(source, target);
    let cells = covered_cells(resized.dimensions(), geometry.cell_size());
    let flattened = background::flatten(&resized, config.background());
    let raster = dither::apply(&flattened, config.dither_mode);

    PreparedImage {
        raster,
        fitted,
        cells,
    }
}

/// Render the configured image for the given terminal.
///
/// # Arguments
/// * `config` - Image settings for this render
/// * `geometry` - Terminal size, queried by the caller for this render
/// * `env` - Environment variables and tool lookup used by auto-detection
/// * `rng` - Randomness for picking an image out of a directory
///
/// # Returns
/// In-band text to print, or a detached overlay that draws on its own.
pub fn render_image<R: Rng + ?Sized>(
    config: &ImageConfig,
    geometry: TerminalGeometry,
    env: &dyn Environment,
    rng: &mut R,
) -> Result<Rendered, RenderError> {
    let path = resolve_source(&config.path, rng)?;
    let source = RasterImage::open(&path)?;
    let prepared = prepare(&source, config, geometry);

    let ctx = EncodeContext {
        cells: prepared.cells,
        geometry,
        render_mode: config.render_mode,
        offset: config.offset,
        env,
    };
    let (protocol, rendered) = protocol::encode(config.protocol, &prepared.raster, &ctx)?;
    log::debug!("rendered {} with {}", path.display(), protocol);
    Ok(rendered)
}
