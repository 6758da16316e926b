/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter, Write};

use cereal_bmp::Bitmap;

use crate::signature::is_ink;

pub const INK_SYMBOL: char = '■';
pub const BACKGROUND_SYMBOL: char = '□';

/// Text rendering of a bitmap's ink pixels, one line per row
pub struct InkMask<'a> {
    bitmap: &'a Bitmap
}

impl<'a> InkMask<'a> {
    pub fn new(bitmap: &'a Bitmap) -> InkMask<'a> {
        InkMask { bitmap }
    }
}

impl Display for InkMask<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.bitmap.rows() {
            for pixel in row {
                f.write_char(if is_ink(pixel) { INK_SYMBOL } else { BACKGROUND_SYMBOL })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
