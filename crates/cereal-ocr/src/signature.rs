/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glyph signatures
//!
//! A signature reduces a glyph to two projections, the number of ink
//! pixels in every row and in every column. Signatures own their
//! projections, the bitmap can be dropped once one is derived.

use cereal_bmp::{Bitmap, Pixel};

/// Whether a pixel is part of the glyph
///
/// Only pure white counts, anything else, gray included, is background.
#[inline(always)]
pub fn is_ink(pixel: &Pixel) -> bool {
    pixel.r == 255 && pixel.g == 255 && pixel.b == 255
}

/// Where a glyph sits inside a larger image, in pixels, inclusive
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    pub top:    usize,
    pub left:   usize,
    pub bottom: usize,
    pub right:  usize
}

/// Row and column projections of a glyph plus its label
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlyphSignature {
    character:         String,
    width:             usize,
    height:            usize,
    row_projection:    Vec<u32>,
    column_projection: Vec<u32>,
    bounding_box:      Option<BoundingBox>
}

impl GlyphSignature {
    /// Derive an unclassified signature from a bitmap
    pub fn from_bitmap(bitmap: &Bitmap) -> GlyphSignature {
        let width = bitmap.width();
        let height = bitmap.height();
        let pixels = bitmap.pixels();

        let row_projection = bitmap
            .rows()
            .map(|row| row.iter().filter(|p| is_ink(p)).count() as u32)
            .collect();

        // strided walk down every column
        let column_projection = (0..width)
            .map(|x| {
                pixels
                    .iter()
                    .skip(x)
                    .step_by(width)
                    .filter(|p| is_ink(p))
                    .count() as u32
            })
            .collect();

        GlyphSignature {
            character: String::new(),
            width,
            height,
            row_projection,
            column_projection,
            bounding_box: None
        }
    }

    /// Derive a signature from a bitmap and label it
    pub fn with_character(character: impl Into<String>, bitmap: &Bitmap) -> GlyphSignature {
        let mut signature = GlyphSignature::from_bitmap(bitmap);
        signature.character = character.into();
        signature
    }

    /// Record where the glyph was found
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> GlyphSignature {
        self.bounding_box = Some(bounding_box);
        self
    }

    pub fn set_character(&mut self, character: impl Into<String>) {
        self.character = character.into();
    }

    /// The label, empty if the glyph is unclassified
    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn is_classified(&self) -> bool {
        !self.character.is_empty()
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Ink pixels per row, top to bottom
    pub fn row_projection(&self) -> &[u32] {
        &self.row_projection
    }

    /// Ink pixels per column, left to right
    pub fn column_projection(&self) -> &[u32] {
        &self.column_projection
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }
}
