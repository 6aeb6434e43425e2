//! Resampling to the fitted size.

use image::imageops::{self, FilterType};

use super::fit::CellSize;
use super::raster::RasterImage;

/// Pixel box an image of `cells` should be resampled into.
///
/// `cell_px` is the size of one terminal cell in pixels, so the pixel box
/// has the on-screen proportions of the fitted cell area.
pub fn pixel_target(cells: CellSize, cell_px: (u32, u32)) -> (u32, u32) {
    (
        u32::from(cells.width).saturating_mul(cell_px.0).max(1),
        u32::from(cells.height).saturating_mul(cell_px.1).max(1),
    )
}

/// Cells a raster of `pixels` actually covers, rounded up.
pub fn covered_cells(pixels: (u32, u32), cell_px: (u32, u32)) -> CellSize {
    let cover = |px: u32, cell: u32| px.div_ceil(cell.max(1)).clamp(1, u32::from(u16::MAX)) as u16;
    CellSize {
        width: cover(pixels.0, cell_px.0),
        height: cover(pixels.1, cell_px.1),
    }
}

/// Largest size with the source's aspect ratio that fits in the box.
pub fn fit_within(src: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = src;
    let (max_w, max_h) = max;
    if src_w == 0 || src_h == 0 {
        return (max_w.max(1), max_h.max(1));
    }

    let ratio = (f64::from(max_w) / f64::from(src_w)).min(f64::from(max_h) / f64::from(src_h));
    let width = (f64::from(src_w) * ratio).round().clamp(1.0, f64::from(max_w.max(1)));
    let height = (f64::from(src_h) * ratio).round().clamp(1.0, f64::from(max_h.max(1)));
    (width as u32, height as u32)
}

/// Lanczos resample of `image` to fit inside `max` without cropping.
pub fn resize_to_fit(image: &RasterImage, max: (u32, u32)) -> RasterImage {
    let (width, height) = fit_within(image.dimensions(), max);
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    log::debug!(
        "resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    RasterImage::new(imageops::resize(
        image.pixels(),
        width,
        height,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_pixel_target_scales_cells() {
        let cells = CellSize {
            width: 40,
            height: 20,
        };
        assert_eq!(pixel_target(cells, (10, 20)), (400, 400));
    }

    #[test]
    fn test_covered_cells_round_up() {
        assert_eq!(
            covered_cells((200, 200), (10, 20)),
            CellSize {
                width: 20,
                height: 10
            }
        );
        assert_eq!(
            covered_cells((201, 21), (10, 20)),
            CellSize {
                width: 21,
                height: 2
            }
        );
        assert_eq!(
            covered_cells((1, 1), (10, 20)),
            CellSize {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        assert_eq!(fit_within((1000, 500), (400, 400)), (400, 200));
        assert_eq!(fit_within((500, 1000), (400, 400)), (200, 400));
        assert_eq!(fit_within((100, 100), (400, 200)), (200, 200));
    }

    #[test]
    fn test_fit_within_upscales_small_sources() {
        assert_eq!(fit_within((10, 5), (100, 100)), (100, 50));
    }

    #[test]
    fn test_resize_does_not_touch_source() {
        let source = RasterImage::new(RgbaImage::from_pixel(64, 32, Rgba([200, 100, 50, 255])));
        let before = source.clone();
        let resized = resize_to_fit(&source, (16, 16));
        assert_eq!(resized.dimensions(), (16, 8));
        assert_eq!(source, before);
    }

    #[test]
    fn test_resize_same_size_is_identity() {
        let source = RasterImage::new(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 4])));
        assert_eq!(resize_to_fit(&source, (8, 8)), source);
    }
}
