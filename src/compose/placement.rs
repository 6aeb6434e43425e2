//! Where the logo and image go relative to the info box.

use serde::{Deserialize, Serialize};

/// Side of the info box a block is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Above,
    Below,
    #[default]
    #[serde(alias = "side")]
    Left,
    Right,
}

/// Ordering between logo and image when they share a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOrder {
    pub show_logo_first: bool,
    pub show_image_first: bool,
}

impl Default for DisplayOrder {
    fn default() -> Self {
        Self {
            show_logo_first: true,
            show_image_first: false,
        }
    }
}

impl DisplayOrder {
    /// Whether the image precedes the logo. `show_image_first` wins when both
    /// flags are set; with neither set the logo comes first.
    pub fn image_first(&self) -> bool {
        self.show_image_first
    }
}

/// Complete placement configuration for one composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub logo: Placement,
    pub image: Placement,
    pub order: DisplayOrder,
}
