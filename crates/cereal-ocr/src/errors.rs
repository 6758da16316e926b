/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during recognition
use std::fmt::{Debug, Display, Formatter};

use cereal_bmp::BmpDecoderErrors;

/// Errors that may occur when building signatures or recognizing glyphs
///
/// Not finding a match is not an error, see [`MatchResult`](crate::MatchResult)
pub enum OcrErrors {
    /// Two projections or glyphs that should be the same size aren't
    ///
    /// # Arguments
    /// - 1st argument is what was compared, e.g `"width"`
    /// - 2nd and 3rd arguments are the two sizes
    DimensionMismatch(&'static str, usize, usize),
    /// A glyph bitmap could not be decoded
    DecodeErrors(BmpDecoderErrors),
    /// Reading a file or directory failed
    IoError(std::io::Error),
    /// Generic message
    Generic(String)
}

impl Debug for OcrErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrErrors::DimensionMismatch(what, left, right) => {
                writeln!(f, "Dimension mismatch, {what} {left} does not match {right}")
            }
            OcrErrors::DecodeErrors(err) => {
                writeln!(f, "Could not decode bitmap: {:?}", err)
            }
            OcrErrors::IoError(err) => {
                writeln!(f, "I/O error {}", err)
            }
            OcrErrors::Generic(message) => {
                writeln!(f, "{message}")
            }
        }
    }
}

impl Display for OcrErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for OcrErrors {}

impl From<BmpDecoderErrors> for OcrErrors {
    fn from(value: BmpDecoderErrors) -> Self {
        OcrErrors::DecodeErrors(value)
    }
}

impl From<std::io::Error> for OcrErrors {
    fn from(value: std::io::Error) -> Self {
        OcrErrors::IoError(value)
    }
}
