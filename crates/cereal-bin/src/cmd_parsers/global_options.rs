/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use cereal_core::options::DecoderOptions;
use cereal_ocr::{RecognizerOptions, DEFAULT_THRESHOLD};
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub threshold:       f64,
    pub decoder_options: DecoderOptions,
    pub show:            bool,
    pub scores:          bool,
    pub json:            bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            threshold:       DEFAULT_THRESHOLD,
            decoder_options: DecoderOptions::default(),
            show:            false,
            scores:          false,
            json:            false
        }
    }

    pub fn recognizer_options(&self) -> RecognizerOptions {
        RecognizerOptions::default()
            .set_threshold(self.threshold)
            .set_decoder_options(self.decoder_options)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(threshold) = options.get_one::<f64>("threshold") {
        info!("Setting threshold to {}", threshold);
        cmd_options.threshold = *threshold;
    }
    cmd_options.decoder_options = get_decoder_options(options);

    cmd_options.show = options.get_flag("show");
    cmd_options.scores = options.get_flag("scores");
    cmd_options.json = options.get_flag("json");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::parse_options;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn flags_reach_the_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "cereal",
                "--charset",
                "glyphs",
                "--threshold",
                "0.9",
                "--strict",
                "--max-width",
                "32",
                "--scores",
                "x.bmp"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.threshold, 0.9);
        assert!(options.scores);
        assert!(!options.show);
        assert!(options.decoder_options.strict_mode());
        assert_eq!(options.decoder_options.max_width(), 32);
        assert_eq!(options.decoder_options.max_height(), 1 << 14);
        assert_eq!(options.recognizer_options().threshold(), 0.9);
    }
}
