//! Terminal facts the renderer depends on.
//!
//! - [`geometry`] - column/row count with an 80x24 fallback
//! - [`width`] - display width of text that may carry escape sequences

mod geometry;
mod width;

pub use geometry::{
    parse_stty_size, TerminalGeometry, DEFAULT_CELL_HEIGHT_PX, DEFAULT_CELL_WIDTH_PX,
    DEFAULT_COLUMNS, DEFAULT_ROWS,
};
pub use width::{display_width, is_control_only, pad_to_width};
