/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct holding options shared by
//! everything that turns bytes into a bitmap.
//!
//! The same `DecoderOptions` can be reused for every decode.

/// Decoder options
///
/// Options are set with the builder style `set_*` methods
/// and read back with the getters of the same name.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat some warnings as errors
    ///
    /// Some images carry header fields that disagree with the
    /// data, e.g a wrong file size. When set to false these are
    /// logged and ignored, when set to true decoding fails.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Options for command line use, limits are lifted and
    /// recoverable errors are ignored
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
            .set_strict_mode(false)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
