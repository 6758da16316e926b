/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use clap::{value_parser, Arg, ArgAction, Command};

pub(crate) mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("cereal")
        .about("Recognize single glyph BMP images against a set of known glyphs")
        .arg(Arg::new("in")
            .help("Glyph images to recognize")
            .value_name("IMAGE")
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true))
        .arg(Arg::new("charset")
            .short('c')
            .long("charset")
            .value_name("DIR")
            .help("Directory of known glyphs, one <character>.bmp file each")
            .required_unless_present("probe"))
        .arg(Arg::new("threshold")
            .short('t')
            .long("threshold")
            .help("Similarity a glyph must exceed to be reported")
            .long_help(help_strings::THRESHOLD_HELP)
            .value_parser(value_parser!(f64))
            .default_value("0.75"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the BMP header of every input as JSON and exit")
            .conflicts_with_all(["charset", "show", "scores", "json"]))
        .arg(Arg::new("show")
            .long("show")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print the ink mask of every glyph loaded and every input"))
        .arg(Arg::new("scores")
            .long("scores")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print every comparable candidate, best first"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print results as JSON objects"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about loaded glyphs and decisions"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest image width the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest image height the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat header inconsistencies as errors")
            .long_help(help_strings::STRICT_HELP))
}
