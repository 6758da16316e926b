/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// File layout handled here, all fields little endian
//
// BITMAPFILEHEADER (14 bytes)
//   0  2  magic, "BM"
//   2  4  file size
//   6  4  two reserved u16 fields
//  10  4  offset of the pixel array
//
// BITMAPINFOHEADER (40 bytes, larger headers share this prefix)
//  14  4  header size
//  18  4  width, signed
//  22  4  height, signed. Positive means rows are stored bottom to top
//  26  2  color planes
//  28  2  bits per pixel
//  30  4  compression method
//  34  4  image size
//  38  4  horizontal resolution
//  42  4  vertical resolution
//  46  4  palette size
//  50  4  important colors
//
// The pixel array stores each row as BGR triples padded to a multiple of 4 bytes.

use alloc::vec;
use alloc::vec::Vec;

use cereal_core::bytestream::ByteReader;
use cereal_core::log::{trace, warn};
use cereal_core::options::DecoderOptions;

use crate::common::{BmpCompression, BmpInfo, FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use crate::{Bitmap, BmpDecoderErrors, Pixel};

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if let Some(sz) = bytes.get(14..18) {
                let sz = u32::from_le_bytes([sz[0], sz[1], sz[2], sz[3]]);

                return sz == 12
                    || sz == 16 /*os-v2*/
                    || sz == 40
                    || sz == 52
                    || sz == 56
                    || sz == 64 /*os-v2*/
                    || sz == 108
                    || sz == 124;
            }
        }
    }
    false
}

/// A BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// ```no_run
/// use cereal_bmp::BmpDecoder;
///
/// fn main() -> Result<(), cereal_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(b"BMP");
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
/// ```no_run
/// use cereal_bmp::BmpDecoder;
///
/// fn main() -> Result<(), cereal_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(b"BMP");
///     let bitmap = decoder.decode()?;
///     println!("Pixels length:{}", bitmap.pixels().len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: AsRef<[u8]>
{
    bytes:           ByteReader<T>,
    options:         DecoderOptions,
    info:            BmpInfo,
    width:           usize,
    height:          usize,
    row_size:        usize,
    raw_row_size:    usize,
    flip_vertically: bool,
    decoded_headers: bool
}

impl<T> BmpDecoder<T>
where
    T: AsRef<[u8]>
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    ///
    /// # Arguments
    /// - `data`: The buffer from which we will read bytes from
    ///
    /// # Returns
    /// - A BMP decoder instance
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`:  Specialized options for this decoder
    ///
    /// returns: A BMP Decoder instance
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            info: BmpInfo::default(),
            width: 0,
            height: 0,
            row_size: 0,
            raw_row_size: 0,
            flip_vertically: false,
            decoded_headers: false
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, most information fields will be filled
    /// except the actual decoding bytes
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let min_size = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

        if self.bytes.len() < min_size {
            return Err(BmpDecoderErrors::TooSmallBuffer(min_size, self.bytes.len()));
        }
        self.bytes.set_position(0)?;

        if self.bytes.get_u8_err()? != b'B' || self.bytes.get_u8_err()? != b'M' {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        let mut info = BmpInfo {
            file_size: self.bytes.get_u32_le_err()?,
            ..BmpInfo::default()
        };
        // two reserved u16's
        self.bytes.skip(4)?;
        info.pixels_offset = self.bytes.get_u32_le_err()?;

        info.dib_header_size = self.bytes.get_u32_le_err()?;
        info.width = self.bytes.get_i32_le_err()?;
        info.height = self.bytes.get_i32_le_err()?;
        info.planes = self.bytes.get_u16_le_err()?;
        info.bits_per_pixel = self.bytes.get_u16_le_err()?;
        info.compression = self.bytes.get_u32_le_err()?;
        info.image_size = self.bytes.get_u32_le_err()?;
        info.horizontal_resolution = self.bytes.get_i32_le_err()?;
        info.vertical_resolution = self.bytes.get_i32_le_err()?;
        info.palette_colors = self.bytes.get_u32_le_err()?;
        info.important_colors = self.bytes.get_u32_le_err()?;

        trace!("DIB header size: {}", info.dib_header_size);
        trace!("Width: {}", info.width);
        trace!("Height: {}", info.height);
        trace!("Bit depth: {}", info.bits_per_pixel);
        trace!("Compression: {}", info.compression);

        if info.file_size as usize != self.bytes.len() {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::GenericStatic(
                    "Declared file size does not match the buffer length"
                ));
            }
            warn!(
                "Declared file size {} differs from buffer length {}",
                info.file_size,
                self.bytes.len()
            );
        }
        if info.planes != 1 {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::GenericStatic("Invalid number of color planes"));
            }
            warn!("Number of color planes is {}, expected 1", info.planes);
        }

        match BmpCompression::from_u32(info.compression) {
            Some(BmpCompression::RGB) => (),
            _ => return Err(BmpDecoderErrors::UnsupportedCompression(info.compression))
        }
        if info.bits_per_pixel != 24 {
            return Err(BmpDecoderErrors::UnsupportedDepth(info.bits_per_pixel));
        }

        if info.width <= 0 {
            return Err(BmpDecoderErrors::InvalidDimensions(
                "width",
                i64::from(info.width)
            ));
        }
        if info.height == 0 {
            return Err(BmpDecoderErrors::InvalidDimensions("height", 0));
        }
        // negative heights mean rows are already stored top to bottom
        self.flip_vertically = info.height > 0;

        self.width = info.width.unsigned_abs() as usize;
        self.height = info.height.unsigned_abs() as usize;

        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }
        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }

        self.row_size = info.row_size().ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        self.raw_row_size = info
            .raw_row_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        trace!("Row size: {}", self.row_size);
        trace!("Padding: {}", self.row_size - self.raw_row_size);

        let pixel_end = self
            .row_size
            .checked_mul(self.height)
            .and_then(|size| size.checked_add(info.pixels_offset as usize))
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if pixel_end > self.bytes.len() {
            return Err(BmpDecoderErrors::TooSmallBuffer(pixel_end, self.bytes.len()));
        }

        self.info = info;
        self.decoded_headers = true;

        Ok(())
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Get the parsed header fields or none if the headers weren't decoded
    pub fn info(&self) -> Option<&BmpInfo> {
        if !self.decoded_headers {
            return None;
        }
        Some(&self.info)
    }

    /// Return the expected number of pixels in the output
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_pixels(&self) -> Option<usize> {
        if !self.decoded_headers {
            return None;
        }
        self.width.checked_mul(self.height)
    }

    /// Decode an image returning a [`Bitmap`] whose first pixel
    /// is the top left pixel of the image
    pub fn decode(&mut self) -> Result<Bitmap, BmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_pixels()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        let mut pixels = vec![Pixel::default(); output_size];
        let mut scanline = vec![0_u8; self.raw_row_size];

        self.bytes.set_position(self.info.pixels_offset as usize)?;

        // BMP writes from bottom to top meaning the first stored row
        // is the last visual row, rchunks fills the output from the bottom
        // so it comes out top to bottom without a separate flip pass.
        if self.flip_vertically {
            for out in pixels.rchunks_exact_mut(self.width) {
                self.read_scanline(&mut scanline, out)?;
            }
        } else {
            for out in pixels.chunks_exact_mut(self.width) {
                self.read_scanline(&mut scanline, out)?;
            }
        }

        Ok(Bitmap::new_unchecked(
            self.info.width,
            self.info.height,
            self.info.bits_per_pixel,
            pixels
        ))
    }

    /// Read one stored row, skip its padding bytes and convert BGR to RGB
    fn read_scanline(
        &mut self, scanline: &mut [u8], out: &mut [Pixel],
    ) -> Result<(), BmpDecoderErrors> {
        self.bytes.read_exact_bytes(scanline)?;
        self.bytes.skip(self.row_size - self.raw_row_size)?;

        for (pixel, bgr) in out.iter_mut().zip(scanline.chunks_exact(3)) {
            *pixel = Pixel::from_bgr([bgr[0], bgr[1], bgr[2]]);
        }
        Ok(())
    }
}
