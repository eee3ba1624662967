/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
fn color_arg(default: &'static str) -> Arg {
    Arg::new("color")
        .short('c')
        .long("color")
        .help("Fill color as #RRGGBB")
        .long_help("Fill color as #RRGGBB or RRGGBB, case insensitive.\nColors that don't parse fall back to a default instead of failing")
        .default_value(default)
}

#[rustfmt::skip]
fn solid_options() -> Command {
    Command::new("solid")
        .about("Write a single color png")
        .arg(color_arg("#000000"))
        .arg(Arg::new("width")
            .short('W')
            .long("width")
            .help("Image width in pixels")
            .value_parser(value_parser!(u32).range(1..))
            .required(true))
        .arg(Arg::new("height")
            .short('H')
            .long("height")
            .help("Image height in pixels")
            .value_parser(value_parser!(u32).range(1..))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("File to write the png to")
            .required(true))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse widths above this")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse heights above this")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}

#[rustfmt::skip]
fn icons_options() -> Command {
    Command::new("icons")
        .about("Write the three pass icons, icon.png, icon@2x.png and icon@3x.png")
        .arg(color_arg("#000000")
            .help("Pass background color as #RRGGBB")
            .long_help("Pass background color as #RRGGBB.\n#000000 produces dark gray icons, colors that don't parse do too"))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Directory to write the icons to, created if missing")
            .required(true))
}

#[rustfmt::skip]
fn inspect_options() -> Command {
    Command::new("inspect")
        .about("List the chunks of a png and verify its checksums")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Png file to inspect")
            .required(true))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the report as json"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("swatch")
        .about("Solid color png assets for wallet passes")
        .subcommand(solid_options())
        .subcommand(icons_options())
        .subcommand(inspect_options())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Overwrite existing files without asking"))
}

#[test]
fn verify_cmd() {
    create_cmd_args().debug_assert();
}
