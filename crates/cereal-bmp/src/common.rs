/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the `BITMAPFILEHEADER`
pub(crate) const FILE_HEADER_SIZE: usize = 14;
/// Size of a `BITMAPINFOHEADER`, the smallest DIB header we read
pub(crate) const INFO_HEADER_SIZE: usize = 40;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            _ => None
        }
    }
}

/// Fields of the file header and the DIB header
///
/// Everything here is exactly as stored in the file, the decoder
/// only relies on the offset, dimensions, depth and compression.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BmpInfo {
    pub file_size:             u32,
    pub pixels_offset:         u32,
    pub dib_header_size:       u32,
    pub width:                 i32,
    pub height:                i32,
    pub planes:                u16,
    pub bits_per_pixel:        u16,
    pub compression:           u32,
    pub image_size:            u32,
    pub horizontal_resolution: i32,
    pub vertical_resolution:   i32,
    pub palette_colors:        u32,
    pub important_colors:      u32
}

impl BmpInfo {
    /// Bytes per stored row, including the padding that rounds
    /// every row up to a multiple of 4 bytes
    ///
    /// Returns `None` on overflow
    pub fn row_size(&self) -> Option<usize> {
        let bits = usize::from(self.bits_per_pixel).checked_mul(self.width.unsigned_abs() as usize)?;
        Some(bits.checked_add(31)? / 32 * 4)
    }
    /// Bytes of actual pixel data per stored row
    pub fn raw_row_size(&self) -> Option<usize> {
        let bits = usize::from(self.bits_per_pixel).checked_mul(self.width.unsigned_abs() as usize)?;
        Some(bits.checked_add(7)? / 8)
    }
    /// Padding bytes at the end of every stored row
    pub fn padding(&self) -> Option<usize> {
        self.row_size()?.checked_sub(self.raw_row_size()?)
    }
}

#[cfg(test)]
mod tests {
    use super::BmpInfo;

    fn info(width: i32) -> BmpInfo {
        BmpInfo {
            width,
            height: 1,
            bits_per_pixel: 24,
            ..Default::default()
        }
    }

    #[test]
    fn rows_round_up_to_four_bytes() {
        // 5 pixels, 15 bytes of data padded to 16
        assert_eq!(info(5).row_size(), Some(16));
        assert_eq!(info(5).raw_row_size(), Some(15));
        assert_eq!(info(5).padding(), Some(1));
        // 4 pixels, 12 bytes, no padding
        assert_eq!(info(4).padding(), Some(0));
        // 1 pixel, 3 bytes padded to 4
        assert_eq!(info(1).row_size(), Some(4));
        assert_eq!(info(10).padding(), Some(2));
    }
}
