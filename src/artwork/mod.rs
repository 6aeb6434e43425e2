//! Raster image rendering for the terminal.
//!
//! Converts an image file into something a terminal can display:
//!
//! 1. **Source resolution** - a file, or a random pick from a directory
//! 2. **Decoding** - PNG, JPEG or WEBP into an RGBA buffer
//! 3. **Fitting** - cell dimensions from aspect ratio and terminal size
//! 4. **Resizing** - Lanczos resample into the fitted pixel box
//! 5. **Background** - optional flattening over a solid colour
//! 6. **Dithering** - optional Floyd-Steinberg quantization
//! 7. **Encoding** - handed to [`crate::protocol`]

mod background;
mod dither;
mod error;
mod fit;
mod options;
mod pipeline;
mod raster;
mod resize;
mod source;

pub use background::{flatten, Background};
pub use dither::{apply as apply_dither, floyd_steinberg, QUANT_STEP};
pub use error::RenderError;
pub use fit::{
    cell_aspect_ratio, fit_dimensions, CellSize, SizeOverrides, CELL_ASPECT_CORRECTION,
    DEFAULT_FILL, EDGE_MARGIN, MIN_HEIGHT, MIN_WIDTH,
};
pub use options::{DitherMode, ImageConfig, RenderMode};
pub use pipeline::{prepare, render_image, PreparedImage};
pub use raster::RasterImage;
pub use resize::{covered_cells, fit_within, pixel_target, resize_to_fit};
pub use source::{is_supported_image, resolve_source, SUPPORTED_EXTENSIONS};
