/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::BTreeMap;

use cereal_bmp::Bitmap;

use crate::signature::GlyphSignature;

/// Known glyphs keyed by their label
///
/// Signatures are computed once when a glyph is registered and never
/// recomputed during recognition. Iteration is in label order.
///
/// The library is plain data, it can be shared between threads
/// that recognize concurrently as long as nobody mutates it.
#[derive(Clone, Debug, Default)]
pub struct GlyphLibrary {
    glyphs: BTreeMap<String, GlyphSignature>
}

impl GlyphLibrary {
    pub fn new() -> GlyphLibrary {
        GlyphLibrary::default()
    }

    /// Derive a signature from `bitmap` and store it under `label`
    ///
    /// Registering a label twice keeps the latest signature, the
    /// replaced one is returned.
    pub fn register_glyph(
        &mut self, label: impl Into<String>, bitmap: &Bitmap,
    ) -> Option<GlyphSignature> {
        let signature = GlyphSignature::with_character(label, bitmap);
        self.insert(signature)
    }

    /// Store an already computed signature under its own label
    pub fn insert(&mut self, signature: GlyphSignature) -> Option<GlyphSignature> {
        self.glyphs
            .insert(signature.character().to_string(), signature)
    }

    pub fn get(&self, label: &str) -> Option<&GlyphSignature> {
        self.glyphs.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.glyphs.contains_key(label)
    }

    pub fn remove(&mut self, label: &str) -> Option<GlyphSignature> {
        self.glyphs.remove(label)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    /// Entries in ascending label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GlyphSignature)> {
        self.glyphs.iter().map(|(label, glyph)| (label.as_str(), glyph))
    }
}
