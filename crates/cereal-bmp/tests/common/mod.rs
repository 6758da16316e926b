/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

use cereal_bmp::Pixel;

pub const HEADER_SIZE: usize = 54;

/// Write a 24 bit BMP holding `pixels` (top to bottom, left to right)
///
/// A positive `height` stores rows bottom to top like most writers do,
/// a negative one stores them top to bottom.
pub fn encode_bmp24(width: usize, height: i32, pixels: &[Pixel]) -> Vec<u8> {
    let rows = height.unsigned_abs() as usize;
    assert_eq!(pixels.len(), width * rows);

    let row_size = (24 * width + 31) / 32 * 4;
    let file_size = HEADER_SIZE + row_size * rows;

    let mut out = Vec::with_capacity(file_size);
    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
    // info header
    out.extend_from_slice(&40_u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&24_u16.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&((row_size * rows) as u32).to_le_bytes());
    out.extend_from_slice(&2835_i32.to_le_bytes());
    out.extend_from_slice(&2835_i32.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());

    let mut write_row = |row: &[Pixel]| {
        for p in row {
            out.extend_from_slice(&[p.b, p.g, p.r]);
        }
        // pad with a recognisable value, the decoder must never read it as a pixel
        out.resize(out.len() + row_size - width * 3, 0xAB);
    };
    if height > 0 {
        pixels.chunks_exact(width).rev().for_each(&mut write_row);
    } else {
        pixels.chunks_exact(width).for_each(&mut write_row);
    }
    out
}

/// Pixels whose channels encode their own position
pub fn gradient(width: usize, height: usize) -> Vec<Pixel> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Pixel::new(x as u8, y as u8, (x + y) as u8)))
        .collect()
}

/// Overwrite a little endian u32 field at `offset`
pub fn patch_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn patch_u16(bytes: &mut [u8], offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}
