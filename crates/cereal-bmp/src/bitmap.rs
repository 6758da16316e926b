/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

/// A single decoded pixel, channels are always in RGB order
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }
    /// Build a pixel from a triple stored as blue, green, red
    #[inline(always)]
    pub const fn from_bgr(bgr: [u8; 3]) -> Pixel {
        Pixel::new(bgr[2], bgr[1], bgr[0])
    }
}

/// A decoded image
///
/// Pixels are stored row-major with `pixels[0]` the top left pixel,
/// rows go from top to bottom irrespective of how the file stored them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width:          i32,
    height:         i32,
    bits_per_pixel: u16,
    pixels:         Vec<Pixel>
}

impl Bitmap {
    pub(crate) fn new_unchecked(
        width: i32, height: i32, bits_per_pixel: u16, pixels: Vec<Pixel>,
    ) -> Bitmap {
        debug_assert_eq!(
            pixels.len(),
            width.unsigned_abs() as usize * height.unsigned_abs() as usize
        );
        Bitmap {
            width,
            height,
            bits_per_pixel,
            pixels
        }
    }

    /// Build a 24 bit bitmap from pixels already ordered top to bottom
    ///
    /// Returns `None` if a dimension is zero, does not fit the header's
    /// signed 32 bit fields, or `pixels.len()` is not `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Option<Bitmap> {
        if width == 0 || height == 0 || width.checked_mul(height)? != pixels.len() {
            return None;
        }
        let width = i32::try_from(width).ok()?;
        let height = i32::try_from(height).ok()?;

        Some(Bitmap::new_unchecked(width, height, 24, pixels))
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width.unsigned_abs() as usize
    }
    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.height.unsigned_abs() as usize
    }
    /// Height as declared in the file header, negative for top-down files
    pub const fn stored_height(&self) -> i32 {
        self.height
    }
    /// Whether the file stored its rows top to bottom
    pub const fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub const fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
    /// Pixels of row `y`, counted from the top
    ///
    /// # Panics
    /// If `y` is not less than [`height`](Self::height)
    pub fn row(&self, y: usize) -> &[Pixel] {
        let width = self.width();
        &self.pixels[y * width..(y + 1) * width]
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width())
    }

    /// Pixel at column `x` of row `y`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width() {
            return None;
        }
        self.pixels.get(y * self.width() + x).copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Bitmap, Pixel};

    #[test]
    fn from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![Pixel::BLACK; 3]).is_none());
        assert!(Bitmap::from_pixels(0, 2, vec![]).is_none());

        let bitmap = Bitmap::from_pixels(3, 2, vec![Pixel::WHITE; 6]).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.rows().count(), 2);
        assert!(!bitmap.is_top_down());
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let pixels = (0..6).map(|v| Pixel::new(v, 0, 0)).collect();
        let bitmap = Bitmap::from_pixels(3, 2, pixels).unwrap();

        assert_eq!(bitmap.get(1, 1), Some(Pixel::new(4, 0, 0)));
        assert_eq!(bitmap.get(3, 0), None);
        assert_eq!(bitmap.row(1)[0], Pixel::new(3, 0, 0));
    }

    #[test]
    fn bgr_is_swapped() {
        assert_eq!(Pixel::from_bgr([10, 20, 30]), Pixel::new(30, 20, 10));
    }
}
