/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading glyph bitmaps from disk
//!
//! A charset is a directory of single glyph bitmaps, each named
//! after the character it shows, e.g `0.bmp`, `A.bmp`.

use std::fs;
use std::path::Path;

use cereal_bmp::{Bitmap, BmpDecoder};
use cereal_core::options::DecoderOptions;
use log::{debug, info, warn};

use crate::errors::OcrErrors;
use crate::library::GlyphLibrary;
use crate::render::InkMask;

/// Extension of glyph files, matched case sensitively
pub const GLYPH_EXTENSION: &str = ".bmp";

/// The label a glyph file stands for
///
/// Exactly the trailing `.bmp` is removed, so `b.bmp` is `b` and
/// `mp.bmp` is `mp`. Returns `None` for other files or a bare `.bmp`.
pub fn label_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(GLYPH_EXTENSION)
        .filter(|label| !label.is_empty())
}

/// Read and decode the BMP file at `path`
pub fn load_bitmap<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Bitmap, OcrErrors> {
    let data = fs::read(path.as_ref())?;
    let bitmap = BmpDecoder::new_with_options(&data, options).decode()?;

    debug!(
        "Decoded {} ({}x{})",
        path.as_ref().display(),
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}

/// Load a single glyph file into `library`, returning its label
pub fn add_glyph<P: AsRef<Path>>(
    library: &mut GlyphLibrary, path: P, options: DecoderOptions,
) -> Result<String, OcrErrors> {
    let path = path.as_ref();

    let label = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(label_from_file_name)
        .ok_or_else(|| {
            OcrErrors::Generic(format!("{} is not a glyph bitmap", path.display()))
        })?
        .to_string();

    let bitmap = load_bitmap(path, options)?;

    info!("Loading {:?} - glyph for character {:?}", path, label);
    debug!("\n{}", InkMask::new(&bitmap));

    if library.register_glyph(label.as_str(), &bitmap).is_some() {
        warn!("Glyph {:?} was already loaded, replacing it", label);
    }
    Ok(label)
}

/// Build a library from every `*.bmp` file in `directory`
///
/// Sub-directories are not searched. A file that fails to decode
/// fails the whole load.
pub fn load_charset<P: AsRef<Path>>(
    directory: P, options: DecoderOptions,
) -> Result<GlyphLibrary, OcrErrors> {
    let mut library = GlyphLibrary::new();
    let mut paths = Vec::new();

    for entry in fs::read_dir(directory.as_ref())? {
        let entry = entry?;

        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) if label_from_file_name(name).is_some() => paths.push(entry.path()),
            Some(_) => (),
            None => warn!("Ignoring {:?}, file name is not valid UTF-8", entry.path())
        }
    }
    paths.sort();

    for path in paths {
        add_glyph(&mut library, path, options)?;
    }
    info!(
        "Loaded {} glyphs from {}",
        library.len(),
        directory.as_ref().display()
    );
    Ok(library)
}
