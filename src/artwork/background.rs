//! Optional solid background behind transparent pixels.

use std::str::FromStr;

use super::raster::RasterImage;

/// What transparent pixels are composited over before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Keep the alpha channel as it is.
    #[default]
    Transparent,
    /// Blend over an opaque colour.
    Solid([u8; 3]),
}

impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("transparent") {
            return Ok(Background::Transparent);
        }

        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a #rrggbb colour", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Background::Solid([r, g, b])),
            _ => Err(format!("'{}' is not a #rrggbb colour", s)),
        }
    }
}

/// Composite `image` over `background`, producing an opaque copy.
///
/// A transparent background returns the image unchanged.
pub fn flatten(image: &RasterImage, background: Background) -> RasterImage {
    let Background::Solid(bg) = background else {
        return image.clone();
    };

    let mut pixels = image.pixels().clone();
    for pixel in pixels.pixels_mut() {
        let alpha = u32::from(pixel[3]);
        for c in 0..3 {
            let fg = u32::from(pixel[c]);
            let blended = (fg * alpha + u32::from(bg[c]) * (255 - alpha) + 127) / 255;
            pixel[c] = blended as u8;
        }
        pixel[3] = 255;
    }
    RasterImage::new(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_parse_background() {
        assert_eq!("".parse::<Background>(), Ok(Background::Transparent));
        assert_eq!(
            "Transparent".parse::<Background>(),
            Ok(Background::Transparent)
        );
        assert_eq!(
            "#ff8000".parse::<Background>(),
            Ok(Background::Solid([255, 128, 0]))
        );
        assert_eq!(
            "102030".parse::<Background>(),
            Ok(Background::Solid([16, 32, 48]))
        );
        assert!("#fff".parse::<Background>().is_err());
        assert!("#gggggg".parse::<Background>().is_err());
    }

    #[test]
    fn test_flatten_blends_transparent_pixels() {
        let mut pixels = RgbaImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        pixels.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        let image = RasterImage::new(pixels);

        let flat = flatten(&image, Background::Solid([10, 20, 30]));
        assert_eq!(flat.pixels().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(flat.pixels().get_pixel(1, 0), &Rgba([200, 100, 50, 255]));
        // source untouched
        assert_eq!(image.pixels().get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_flatten_transparent_is_identity() {
        let image = RasterImage::new(RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4])));
        assert_eq!(flatten(&image, Background::Transparent), image);
    }
}
