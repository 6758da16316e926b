/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use cereal_bmp::Bitmap;
use cereal_core::options::DecoderOptions;
use log::{debug, info};

use crate::charset::load_bitmap;
use crate::correlation::compare_glyphs;
use crate::errors::OcrErrors;
use crate::library::GlyphLibrary;
use crate::signature::GlyphSignature;

/// Similarity a candidate must exceed to be accepted
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Options for the recognizer
#[derive(Debug, Copy, Clone)]
pub struct RecognizerOptions {
    /// Similarity the best candidate must strictly exceed
    ///
    /// - Default value: 0.75
    threshold:       f64,
    /// Options used when decoding files in [`Recognizer::process_file`]
    decoder_options: DecoderOptions
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            threshold:       DEFAULT_THRESHOLD,
            decoder_options: DecoderOptions::default()
        }
    }
}

impl RecognizerOptions {
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub const fn decoder_options(&self) -> DecoderOptions {
        self.decoder_options
    }

    pub fn set_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn set_decoder_options(mut self, options: DecoderOptions) -> Self {
        self.decoder_options = options;
        self
    }
}

/// Similarity of one library entry to the unknown glyph
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Score {
    pub character: String,
    pub value:     f64
}

/// Outcome of a recognition
///
/// An empty `character` means nothing cleared the threshold, `score`
/// still holds the best similarity found. `score` is `None` when no
/// library entry could be compared at all.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    pub character: String,
    pub score:     Option<f64>
}

impl MatchResult {
    pub fn no_match(score: Option<f64>) -> MatchResult {
        MatchResult {
            character: String::new(),
            score
        }
    }

    pub fn is_match(&self) -> bool {
        !self.character.is_empty()
    }
}

/// Matches unknown glyphs against a [`GlyphLibrary`]
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    options: RecognizerOptions
}

impl Recognizer {
    pub fn new() -> Recognizer {
        Recognizer::default()
    }

    pub fn new_with_options(options: RecognizerOptions) -> Recognizer {
        Recognizer { options }
    }

    pub const fn options(&self) -> &RecognizerOptions {
        &self.options
    }

    /// Score every comparable library entry against `bitmap`
    ///
    /// See [`rank_signature`](Self::rank_signature)
    pub fn rank(&self, bitmap: &Bitmap, library: &GlyphLibrary) -> Vec<Score> {
        self.rank_signature(&GlyphSignature::from_bitmap(bitmap), library)
    }

    /// Score every comparable library entry against `signature`
    ///
    /// Entries of another size and entries whose similarity is NaN are
    /// left out. The rest is sorted by score, highest first, ties broken
    /// by label in ascending order.
    pub fn rank_signature(&self, signature: &GlyphSignature, library: &GlyphLibrary) -> Vec<Score> {
        let mut scores = Vec::with_capacity(library.len());

        for (label, entry) in library.iter() {
            if entry.dimensions() != signature.dimensions() {
                debug!(
                    "Skipping {:?}, glyph is {:?} but input is {:?}",
                    label,
                    entry.dimensions(),
                    signature.dimensions()
                );
                continue;
            }
            match compare_glyphs(entry, signature) {
                Ok(value) if value.is_nan() => {
                    debug!("Skipping {:?}, similarity is undefined", label);
                }
                Ok(value) => {
                    debug!("Score for {:?}: {:.4}", label, value);
                    scores.push(Score {
                        character: label.to_string(),
                        value
                    });
                }
                Err(e) => {
                    debug!("Skipping {:?}: {:?}", label, e);
                }
            }
        }
        scores.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.character.cmp(&b.character))
        });
        scores
    }

    /// Find the library entry most similar to `bitmap`
    pub fn recognize(&self, bitmap: &Bitmap, library: &GlyphLibrary) -> MatchResult {
        self.recognize_signature(&GlyphSignature::from_bitmap(bitmap), library)
    }

    /// Find the library entry most similar to `signature`
    pub fn recognize_signature(
        &self, signature: &GlyphSignature, library: &GlyphLibrary,
    ) -> MatchResult {
        let scores = self.rank_signature(signature, library);

        let result = match scores.into_iter().next() {
            Some(best) if best.value > self.options.threshold => MatchResult {
                character: best.character,
                score:     Some(best.value)
            },
            Some(best) => MatchResult::no_match(Some(best.value)),
            None => MatchResult::no_match(None)
        };
        info!("Found {:?} in the image, score {:?}", result.character, result.score);

        result
    }

    /// Decode the BMP file at `path` and recognize it
    pub fn process_file<P: AsRef<Path>>(
        &self, path: P, library: &GlyphLibrary,
    ) -> Result<MatchResult, OcrErrors> {
        info!("Processing {}", path.as_ref().display());
        let bitmap = load_bitmap(path, self.options.decoder_options)?;

        Ok(self.recognize(&bitmap, library))
    }
}

/// Recognize `bitmap` against `library` with the given threshold
pub fn recognize(bitmap: &Bitmap, library: &GlyphLibrary, threshold: f64) -> MatchResult {
    let options = RecognizerOptions::default().set_threshold(threshold);

    Recognizer::new_with_options(options).recognize(bitmap, library)
}

#[cfg(test)]
mod tests {
    use cereal_bmp::{Bitmap, Pixel};

    use super::{recognize, MatchResult, Recognizer, RecognizerOptions};
    use crate::correlation::compare_glyphs;
    use crate::library::GlyphLibrary;
    use crate::signature::GlyphSignature;

    fn bitmap_from_mask(mask: &[&str]) -> Bitmap {
        let pixels = mask
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| if c == '#' { Pixel::WHITE } else { Pixel::BLACK })
            .collect();
        Bitmap::from_pixels(mask[0].len(), mask.len(), pixels).unwrap()
    }

    fn triangle() -> Bitmap {
        bitmap_from_mask(&["#...", "##..", "###.", "####"])
    }

    fn slash() -> Bitmap {
        bitmap_from_mask(&["...#", "..##", ".#..", "#..."])
    }

    #[test]
    fn empty_library_has_no_score() {
        let result = Recognizer::new().recognize(&triangle(), &GlyphLibrary::new());

        assert_eq!(result, MatchResult::no_match(None));
        assert!(!result.is_match());
    }

    #[test]
    fn threshold_is_strict() {
        let mut library = GlyphLibrary::new();
        library.register_glyph("s", &slash());

        let unknown = triangle();
        let score = compare_glyphs(
            library.get("s").unwrap(),
            &GlyphSignature::from_bitmap(&unknown)
        )
        .unwrap();
        assert!(!score.is_nan());

        let at = recognize(&unknown, &library, score);
        assert_eq!(at.character, "");
        assert_eq!(at.score, Some(score));

        let below = recognize(&unknown, &library, score - 1e-9);
        assert_eq!(below.character, "s");
        assert_eq!(below.score, Some(score));
    }

    #[test]
    fn ties_are_broken_by_label() {
        let mut library = GlyphLibrary::new();
        library.register_glyph("b", &triangle());
        library.register_glyph("a", &triangle());
        library.register_glyph("c", &slash());

        let recognizer = Recognizer::new();
        let scores = recognizer.rank(&triangle(), &library);

        assert_eq!(scores[0].character, "a");
        assert_eq!(scores[1].character, "b");
        assert!(scores[0].value >= scores[2].value);
        assert_eq!(recognizer.recognize(&triangle(), &library).character, "a");
    }

    #[test]
    fn undefined_scores_are_never_matches() {
        // every row and every column holds one ink pixel
        let diagonal = bitmap_from_mask(&["#...", ".#..", "..#.", "...#"]);
        let mut library = GlyphLibrary::new();
        library.register_glyph("d", &diagonal);

        let options = RecognizerOptions::default().set_threshold(-2.0);
        let result = Recognizer::new_with_options(options).recognize(&diagonal, &library);

        assert_eq!(result, MatchResult::no_match(None));
    }
}
