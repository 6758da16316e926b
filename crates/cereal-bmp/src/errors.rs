/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use cereal_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The input is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Compression method other than `BI_RGB`
    UnsupportedCompression(u32),
    /// Bits per pixel other than 24
    UnsupportedDepth(u16),
    /// A dimension is zero or negative where it can't be
    InvalidDimensions(&'static str, i64),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    /// Generic message
    GenericStatic(&'static str),
    /// Generic allocated message
    Generic(String),
    IoErrors(ByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::UnsupportedCompression(method) => {
                writeln!(
                    f,
                    "Unsupported compression method {method}, only uncompressed RGB (0) is supported"
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(f, "Depth {depth} unsupported, only 24 bits per pixel is supported")
            }
            Self::InvalidDimensions(dimension, found) => {
                writeln!(f, "Invalid {dimension} {found}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::GenericStatic(header) => {
                writeln!(f, "{}", header)
            }
            Self::Generic(message) => {
                writeln!(f, "{}", message)
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

impl From<&'static str> for BmpDecoderErrors {
    fn from(value: &'static str) -> Self {
        BmpDecoderErrors::GenericStatic(value)
    }
}
