/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Similarity between projections
//!
//! Uses the sample Pearson correlation coefficient
//!
//! ```text
//!                n*Σxy - Σx*Σy
//! r = ---------------------------------------
//!     sqrt(n*Σx² - (Σx)²) * sqrt(n*Σy² - (Σy)²)
//! ```
//!
//! Sums are accumulated as integers so a constant projection
//! gives an exact zero divisor and the result is NaN.

use crate::errors::OcrErrors;
use crate::signature::GlyphSignature;

/// Pearson correlation between two equal length projections
///
/// The result is in `[-1, 1]`, or NaN when either input has
/// no variance (e.g all zeros). Callers must treat NaN as no match.
///
/// # Errors
/// [`OcrErrors::DimensionMismatch`] if the lengths differ
pub fn correlate(xs: &[u32], ys: &[u32]) -> Result<f64, OcrErrors> {
    if xs.len() != ys.len() {
        return Err(OcrErrors::DimensionMismatch(
            "projection length",
            xs.len(),
            ys.len()
        ));
    }
    let n = xs.len() as i128;

    let mut x_sum = 0_i128;
    let mut y_sum = 0_i128;
    let mut xy_sum = 0_i128;
    let mut x2_sum = 0_i128;
    let mut y2_sum = 0_i128;

    for (&x, &y) in xs.iter().zip(ys) {
        let (x, y) = (i128::from(x), i128::from(y));

        x_sum += x;
        y_sum += y;
        xy_sum += x * y;
        x2_sum += x * x;
        y2_sum += y * y;
    }

    let dividend = (n * xy_sum - x_sum * y_sum) as f64;
    let divisor =
        ((n * x2_sum - x_sum * x_sum) as f64).sqrt() * ((n * y2_sum - y_sum * y_sum) as f64).sqrt();

    Ok(dividend / divisor)
}

/// Similarity of two glyphs of the same size
///
/// The mean of the row projection correlation and the column
/// projection correlation. Glyphs are not rescaled, they must have
/// the same width and height.
///
/// # Errors
/// [`OcrErrors::DimensionMismatch`] if the widths or heights differ
pub fn compare_glyphs(a: &GlyphSignature, b: &GlyphSignature) -> Result<f64, OcrErrors> {
    if a.width() != b.width() {
        return Err(OcrErrors::DimensionMismatch("width", a.width(), b.width()));
    }
    if a.height() != b.height() {
        return Err(OcrErrors::DimensionMismatch("height", a.height(), b.height()));
    }
    let rows = correlate(a.row_projection(), b.row_projection())?;
    let columns = correlate(a.column_projection(), b.column_projection())?;

    Ok((rows + columns) / 2.0)
}
