/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use std::fs;

use cereal_bmp::{probe_bmp, BmpDecoder};
use cereal_core::options::DecoderOptions;
use clap::ArgMatches;
use log::{error, warn};

use crate::serde::Metadata;

/// Probe input files, extract headers, and print them to standard output.
///
/// Returns `true` if probing was requested, the caller should stop then.
pub fn probe_input_files(args: &ArgMatches) -> bool {
    if !args.get_flag("probe") {
        return false;
    }
    let Some(inputs) = args.get_raw("in") else {
        return true;
    };

    for in_file in inputs {
        let data = match fs::read(in_file) {
            Ok(data) => data,
            Err(e) => {
                error!("Could not read {:?}: {}", in_file, e);
                continue;
            }
        };
        if !probe_bmp(&data) {
            warn!("{:?} is not a BMP file", in_file);
            continue;
        }
        // headers only, lift the size limits
        let mut decoder = BmpDecoder::new_with_options(&data, DecoderOptions::new_cmd());

        if let Err(e) = decoder.decode_headers() {
            error!("Could not read headers of {:?}: {:?}", in_file, e);
            continue;
        }
        if let Some(info) = decoder.info() {
            let metadata = Metadata::new(in_file, data.len() as u64, info);

            match serde_json::to_string_pretty(&metadata) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("Could not serialize headers of {:?}: {}", in_file, e)
            }
        }
    }
    true
}
