/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

use crate::errors::BinErrors;

#[derive(Debug, Copy, Clone, Default)]
pub struct CmdOptions {
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

fn flag(options: &ArgMatches, name: &str) -> bool {
    options.get_one::<bool>(name).copied().unwrap_or(false)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<(), BinErrors> {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}
