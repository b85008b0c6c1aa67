//! Pixel buffer, display mapping and image encoding.

use std::io::Write;
use std::path::Path;

use crate::RenderResult;
use lumen_math::{Color, Interval};

/// Gamma-2 transform from linear light to display space.
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct and quantize a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * Interval::INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Finished render: averaged linear colors in scanline order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// One scanline, left to right.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Display-ready bytes, three per pixel, top-to-bottom and left-to-right.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color_to_rgb(c)).collect()
    }

    /// Write as plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> RenderResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for y in 0..self.height {
            for &color in self.row(y) {
                let [r, g, b] = color_to_rgb(color);
                writeln!(writer, "{} {} {}", r, g, b)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y)))
        })
    }

    /// Save through the `image` crate; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-6);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quantize_no_wraparound() {
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::splat(4.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::splat(-2.0)), [0, 0, 0]);
        // sqrt(0.25) = 0.5 -> 128
        assert_eq!(color_to_rgb(Color::new(0.25, 0.0, 1.0)), [128, 0, 255]);
    }

    #[test]
    fn test_get_set_and_rows() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.row(1), &[Color::ZERO, Color::ZERO, Color::ONE]);
        assert_eq!(image.to_rgb8().len(), 18);
    }

    #[test]
    fn test_write_ppm_scanline_order() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(1, 0, Color::ONE);
        image.set(0, 1, Color::new(0.25, 0.25, 0.25));

        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "P3\n2 2\n255\n0 0 0\n255 255 255\n128 128 128\n0 0 0\n"
        );
    }

    #[test]
    fn test_to_rgb_image_matches_bytes() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.25));

        let rgb = image.to_rgb_image();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.as_raw(), &image.to_rgb8());
    }
}
