//! Scanline bands for parallel rendering.
//!
//! The image is cut into contiguous, non-overlapping groups of rows, one
//! per worker. Each worker owns the pixels of its band exclusively.

use std::ops::Range;

/// A contiguous range of scanlines rendered by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    /// Position of this band from the top of the image
    pub index: usize,
    /// First scanline (inclusive)
    pub y: u32,
    /// Number of scanlines
    pub height: u32,
}

impl Band {
    pub fn new(index: usize, y: u32, height: u32) -> Self {
        Self { index, y, height }
    }

    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    /// Pixels covered by this band in an image of the given width.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.height as usize * width as usize
    }
}

/// Split `height` scanlines into at most `workers` bands of near-equal size.
///
/// Earlier bands take the remainder rows, so sizes differ by at most one.
/// Never returns an empty band; fewer bands than workers come back when the
/// image has fewer rows than that.
pub fn row_bands(height: u32, workers: usize) -> Vec<Band> {
    // Clamp in usize: worker counts past u32::MAX must not wrap to zero.
    let count = workers.max(1).min(height as usize) as u32;
    if count == 0 {
        return Vec::new();
    }

    let base = height / count;
    let remainder = height % count;

    let mut bands = Vec::with_capacity(count as usize);
    let mut y = 0;
    for index in 0..count {
        let rows = base + u32::from(index < remainder);
        bands.push(Band::new(index as usize, y, rows));
        y += rows;
    }

    bands
}

/// Seed for the random stream of one scanline.
///
/// Derived only from the render seed and the row, so a row draws the same
/// numbers whichever worker renders it.
pub fn row_seed(seed: u64, row: u32) -> u64 {
    // splitmix64 finalizer
    let mut z = seed ^ (u64::from(row) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
