/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A small BMP decoder
//!
//! This crate decodes uncompressed 24 bit Windows bitmaps into
//! a grid of RGB pixels ordered top to bottom, left to right.
//!
//! # Features
//! - `no_std` with `alloc` when the default `std` feature is turned off
//! - `log`: trace header fields through the `log` crate
//! - `serde`: serialize the parsed header ([`BmpInfo`])
//!
//! # Supported formats
//! - `BITMAPINFOHEADER` (or larger) files with `BI_RGB` compression and 24 bits per pixel
//! - Bottom-up (positive height) and top-down (negative height) row order
//!
//! # Unsupported formats
//! - RLE and bit-field compression
//! - Paletted images and any depth other than 24
//!
//! ```no_run
//! use cereal_bmp::BmpDecoder;
//!
//! fn main() -> Result<(), cereal_bmp::BmpDecoderErrors> {
//!     let data = std::fs::read("glyph.bmp").unwrap();
//!     let bitmap = BmpDecoder::new(&data).decode()?;
//!     println!("{}x{}", bitmap.width(), bitmap.height());
//!     Ok(())
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use cereal_core;

pub use crate::bitmap::{Bitmap, Pixel};
pub use crate::common::{BmpCompression, BmpInfo};
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::errors::BmpDecoderErrors;

mod bitmap;
mod common;
mod decoder;
mod errors;
