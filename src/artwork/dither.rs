//! Floyd-Steinberg error-diffusion dithering for RGBA images.
//!
//! Each colour channel is quantized to a coarse step and the rounding error
//! is pushed onto unvisited neighbours:
//! - Right:        7/16
//! - Bottom-left:  3/16
//! - Bottom:       5/16
//! - Bottom-right: 1/16
//!
//! Pixels are visited strictly in row-major order; every pixel depends on
//! error accumulated from the ones before it, so the scan stays sequential.

use super::options::DitherMode;
use super::raster::RasterImage;

/// Quantization step per colour channel.
pub const QUANT_STEP: i32 = 32;

/// Neighbour offsets (dx, dy) and their weights out of 16.
const DIFFUSION: [(isize, usize, i32); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

/// Apply the configured dither mode. `None` returns an exact copy.
pub fn apply(image: &RasterImage, mode: DitherMode) -> RasterImage {
    match mode {
        DitherMode::None => image.clone(),
        DitherMode::FloydSteinberg => floyd_steinberg(image),
    }
}

/// Floyd-Steinberg dither of the colour channels. Alpha is left untouched.
pub fn floyd_steinberg(image: &RasterImage) -> RasterImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);
    log::debug!("applying Floyd-Steinberg dithering to {}x{}", width, height);

    // Work in i32 so accumulated error can exceed the u8 range before clamping.
    let mut buffer: Vec<[i32; 3]> = image
        .pixels()
        .pixels()
        .map(|p| [i32::from(p[0]), i32::from(p[1]), i32::from(p[2])])
        .collect();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old = buffer[idx];
            let new = old.map(quantize);
            buffer[idx] = new;

            let error = [old[0] - new[0], old[1] - new[1], old[2] - new[2]];
            distribute_error(&mut buffer, w, h, x, y, error);
        }
    }

    let mut pixels = image.pixels().clone();
    for (pixel, rgb) in pixels.pixels_mut().zip(&buffer) {
        for c in 0..3 {
            pixel[c] = rgb[c].clamp(0, 255) as u8;
        }
    }
    RasterImage::new(pixels)
}

fn quantize(value: i32) -> i32 {
    (value.clamp(0, 255) / QUANT_STEP) * QUANT_STEP
}

/// Push quantization error onto the four forward neighbours.
fn distribute_error(
    buffer: &mut [[i32; 3]],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    error: [i32; 3],
) {
    for (dx, dy, weight) in DIFFUSION {
        let Some(nx) = x.checked_add_signed(dx) else {
            continue;
        };
        let ny = y + dy;
        if nx >= width || ny >= height {
            continue;
        }
        let target = &mut buffer[ny * width + nx];
        for c in 0..3 {
            target[c] = (target[c] + error[c] * weight / 16).clamp(0, 255);
        }
    }
}
