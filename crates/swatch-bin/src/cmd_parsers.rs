/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::Level;
use swatch_core::color::{parse_color_or_log, Rgb};
use swatch_core::options::EncoderOptions;

pub mod global_options;

/// Read the fill color, falling back to `default` with a warning
pub fn get_color(options: &ArgMatches, default: Rgb) -> Rgb {
    match options.get_one::<String>("color") {
        Some(hex) => parse_color_or_log(hex, default, Level::Warn),
        None => default
    }
}

pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let width = options.get_one::<u32>("width").copied().unwrap_or(1);
    let height = options.get_one::<u32>("height").copied().unwrap_or(1);

    let mut encoder_options = EncoderOptions::new(width as usize, height as usize);

    if let Some(max_width) = options.get_one::<usize>("max-width") {
        encoder_options = encoder_options.set_max_width(*max_width);
    }
    if let Some(max_height) = options.get_one::<usize>("max-height") {
        encoder_options = encoder_options.set_max_height(*max_height);
    }
    encoder_options
}
