//! Dimension fitting for aspect-ratio-correct image display.

use crate::terminal::TerminalGeometry;

/// Terminal cells are roughly twice as tall as they are wide, so an image's
/// pixel aspect ratio is halved to get its aspect ratio in cells.
pub const CELL_ASPECT_CORRECTION: f64 = 0.5;

/// Share of the terminal each axis of the default bounding box covers.
pub const DEFAULT_FILL: f64 = 0.6;

/// Smallest fitted width in cells.
pub const MIN_WIDTH: u16 = 20;
/// Smallest fitted height in cells.
pub const MIN_HEIGHT: u16 = 10;
/// Cells kept free between the fitted image and the terminal edge.
pub const EDGE_MARGIN: u16 = 5;

/// User adjustments to the bounding box. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeOverrides {
    pub width: u16,
    pub height: u16,
    pub scale: u16,
}

/// A size measured in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

/// Calculate how many cells an image should occupy.
///
/// The bounding box defaults to 60% of the terminal on each axis. Each axis
/// can be overridden, and both are multiplied by `scale` when it is set.
/// The image is then letterboxed into the box: it first takes the full box
/// width, and if the height that implies does not fit, it takes the full
/// box height instead and derives the width from that. The result is
/// clamped to at least 20x10 and at most 5 cells short of the terminal on
/// each axis; the upper bound wins on terminals too small for both.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `geometry` - Current terminal size
/// * `overrides` - User width/height/scale, 0 meaning unset
///
/// # Example
/// ```ignore
/// // A square image on a 100x50 terminal with no overrides
/// let size = fit_dimensions(512, 512, TerminalGeometry::new(100, 50), SizeOverrides::default());
/// // Box is 60x30; width 60 would need 120 rows, so height binds: 30 rows, 15 columns,
/// // then the 20-column floor applies.
/// assert_eq!((size.width, size.height), (20, 30));
/// ```
pub fn fit_dimensions(
    img_width: u32,
    img_height: u32,
    geometry: TerminalGeometry,
    overrides: SizeOverrides,
) -> CellSize {
    let aspect = cell_aspect_ratio(img_width, img_height);

    let mut max_width = (f64::from(geometry.columns) * DEFAULT_FILL).floor() as u32;
    let mut max_height = (f64::from(geometry.rows) * DEFAULT_FILL).floor() as u32;

    if overrides.width > 0 {
        max_width = u32::from(overrides.width);
    }
    if overrides.height > 0 {
        max_height = u32::from(overrides.height);
    }
    if overrides.scale > 0 {
        max_width = max_width.saturating_mul(u32::from(overrides.scale));
        max_height = max_height.saturating_mul(u32::from(overrides.scale));
    }

    // Fill the box width first, fall back to the box height if that overflows.
    let mut width = max_width;
    let mut height = (f64::from(width) / aspect).floor() as u32;
    if height > max_height {
        height = max_height;
        width = (f64::from(height) * aspect).floor() as u32;
    }

    let ceiling_width = u32::from(geometry.columns.saturating_sub(EDGE_MARGIN).max(1));
    let ceiling_height = u32::from(geometry.rows.saturating_sub(EDGE_MARGIN).max(1));

    let width = width.max(u32::from(MIN_WIDTH)).min(ceiling_width);
    let height = height.max(u32::from(MIN_HEIGHT)).min(ceiling_height);

    CellSize {
        // Both are bounded by a u16 ceiling.
        width: width as u16,
        height: height as u16,
    }
}

/// Image aspect ratio (width / height) expressed in cells.
///
/// Degenerate images are treated as square.
pub fn cell_aspect_ratio(img_width: u32, img_height: u32) -> f64 {
    if img_width == 0 || img_height == 0 {
        return CELL_ASPECT_CORRECTION;
    }
    f64::from(img_width) / f64::from(img_height) * CELL_ASPECT_CORRECTION
}
