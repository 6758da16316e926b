/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use std::ffi::OsStr;
use std::path::Path;

use cereal_ocr::charset::{load_bitmap, load_charset};
use cereal_ocr::render::InkMask;
use cereal_ocr::{GlyphLibrary, MatchResult, OcrErrors, Recognizer, Score};
use clap::ArgMatches;
use log::{error, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Report;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions,
) -> Result<(), OcrErrors> {
    info!("Creating workflows from input");

    let charset = args
        .get_raw("charset")
        .and_then(|mut values| values.next())
        .ok_or_else(|| OcrErrors::Generic("No charset directory given".to_string()))?;

    let library = load_charset(charset, cmd_opts.decoder_options)?;

    if library.is_empty() {
        return Err(OcrErrors::Generic(format!(
            "No glyphs found in {}",
            Path::new(charset).display()
        )));
    }
    if cmd_opts.show {
        show_charset(charset, cmd_opts)?;
    }

    let recognizer = Recognizer::new_with_options(cmd_opts.recognizer_options());
    let inputs = args
        .get_raw("in")
        .ok_or_else(|| OcrErrors::Generic("No input files given".to_string()))?;

    let mut total = 0;
    let mut failed = 0;

    for in_file in inputs {
        total += 1;
        if let Err(e) = process_input(in_file, &recognizer, &library, cmd_opts) {
            error!("Could not process {:?}: {:?}", in_file, e);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(OcrErrors::Generic(format!(
            "{failed} of {total} inputs could not be processed"
        )));
    }
    Ok(())
}

fn process_input(
    in_file: &OsStr, recognizer: &Recognizer, library: &GlyphLibrary, cmd_opts: &CmdOptions,
) -> Result<(), OcrErrors> {
    let bitmap = load_bitmap(in_file, cmd_opts.decoder_options)?;

    if cmd_opts.show {
        println!("{}", Path::new(in_file).display());
        println!("{}", InkMask::new(&bitmap));
    }
    let result = recognizer.recognize(&bitmap, library);
    let scores = if cmd_opts.scores {
        recognizer.rank(&bitmap, library)
    } else {
        Vec::new()
    };

    if cmd_opts.json {
        let ranked = cmd_opts.scores.then_some(scores.as_slice());
        let json = serde_json::to_string(&Report::new(in_file, &result, ranked))
            .map_err(|e| OcrErrors::Generic(e.to_string()))?;
        println!("{json}");
    } else {
        print_result(Path::new(in_file), &result);
        if cmd_opts.scores {
            print_scores(&scores);
        }
    }
    Ok(())
}

fn print_result(path: &Path, result: &MatchResult) {
    match (result.is_match(), result.score) {
        (true, Some(score)) => {
            println!("Found {:?} in {} (score {:.4})", result.character, path.display(), score)
        }
        (_, Some(score)) => println!("No match in {} (best score {:.4})", path.display(), score),
        (_, None) => println!("No match in {} (no glyph of the same size)", path.display())
    }
}

fn print_scores(scores: &[Score]) {
    for score in scores {
        println!("  {:>8.4}  {:?}", score.value, score.character);
    }
}

/// Print every glyph of the charset directory
fn show_charset(charset: &OsStr, cmd_opts: &CmdOptions) -> Result<(), OcrErrors> {
    let mut paths = std::fs::read_dir(charset)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(cereal_ocr::charset::label_from_file_name)
                    .is_some()
        })
        .collect::<Vec<_>>();
    paths.sort();

    for path in paths {
        let bitmap = load_bitmap(&path, cmd_opts.decoder_options)?;
        println!("{}", path.display());
        println!("{}", InkMask::new(&bitmap));
    }
    Ok(())
}
