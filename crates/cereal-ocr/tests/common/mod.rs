/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cereal_ocr::cereal_bmp::{Bitmap, Pixel};

pub const RING: [&str; 10] = [
    "..######..",
    ".#......#.",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    ".#......#.",
    "..######.."
];

/// Constant row projection, never comparable
pub const BAR: [&str; 10] = [
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#.....",
    "....#....."
];

/// Half the pixels lit, no shape
pub const NOISE: [&str; 10] = [
    "##.#..##.#",
    ".#..#...##",
    "#.##.##.##",
    "..#..#.#..",
    "#.#.##.###",
    ".#...#..#.",
    "##.#.#.#.#",
    "..#.#..#..",
    "#.##..#.##",
    ".#..###.#."
];

/// `#` is ink, anything else is a dark background
pub fn mask_pixels(mask: &[&str]) -> Vec<Pixel> {
    mask.iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == '#' { Pixel::WHITE } else { Pixel::new(12, 12, 12) })
        .collect()
}

pub fn bitmap_from_mask(mask: &[&str]) -> Bitmap {
    Bitmap::from_pixels(mask[0].len(), mask.len(), mask_pixels(mask)).unwrap()
}

/// Write a 24 bit, bottom up BMP holding `pixels`
pub fn encode_bmp24(width: usize, height: usize, pixels: &[Pixel]) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height);

    let row_size = (24 * width + 31) / 32 * 4;
    let file_size = 54 + row_size * height;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&54_u32.to_le_bytes());

    out.extend_from_slice(&40_u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&24_u16.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&((row_size * height) as u32).to_le_bytes());
    out.extend_from_slice(&[0; 16]);

    for row in pixels.chunks_exact(width).rev() {
        for p in row {
            out.extend_from_slice(&[p.b, p.g, p.r]);
        }
        out.resize(out.len() + row_size - width * 3, 0);
    }
    out
}

/// Store `mask` as `dir/name` and return the full path
pub fn write_glyph(dir: &Path, name: &str, mask: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let data = encode_bmp24(mask[0].len(), mask.len(), &mask_pixels(mask));
    std::fs::write(&path, data).unwrap();
    path
}
