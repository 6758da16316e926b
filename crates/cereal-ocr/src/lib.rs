/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Template based character recognition
//!
//! Glyphs are reduced to two projections, the number of ink (pure white)
//! pixels in every row and in every column. An unknown glyph is compared
//! against every glyph of the same size in a [`GlyphLibrary`] by averaging
//! the Pearson correlation of the row projections and of the column
//! projections. The best candidate wins if it strictly exceeds a threshold.
//!
//! ```no_run
//! use cereal_core::options::DecoderOptions;
//! use cereal_ocr::charset::load_charset;
//! use cereal_ocr::Recognizer;
//!
//! fn main() -> Result<(), cereal_ocr::OcrErrors> {
//!     let library = load_charset("data/ocr-a", DecoderOptions::default())?;
//!     let result = Recognizer::new().process_file("x0.bmp", &library)?;
//!
//!     if result.is_match() {
//!         println!("Found {:?}", result.character);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! - `serde`: derive `Serialize` for signatures and results
pub use cereal_bmp;
pub use cereal_core;

pub use crate::correlation::{compare_glyphs, correlate};
pub use crate::errors::OcrErrors;
pub use crate::library::GlyphLibrary;
pub use crate::recognizer::{
    recognize, MatchResult, Recognizer, RecognizerOptions, Score, DEFAULT_THRESHOLD
};
pub use crate::signature::{is_ink, BoundingBox, GlyphSignature};

pub mod charset;
mod correlation;
mod errors;
mod library;
mod recognizer;
pub mod render;
mod signature;
