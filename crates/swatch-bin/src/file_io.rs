/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{stdin, BufRead, BufWriter};
use std::path::Path;

use log::info;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::BinErrors;

/// Check whether `out_path` may be written to, asking on the
/// terminal if it already exists and `--yes` wasn't given
pub fn verify_output_path(out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), BinErrors> {
    if out_path.is_dir() {
        return Err(BinErrors::GenericString(format!(
            "Path {out_path:?} is a directory"
        )));
    }
    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {out_path:?}");
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(BinErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}

/// Open `out_path` for writing, truncating any previous contents
pub fn create_output(out_path: &Path, cmd_opts: &CmdOptions) -> Result<BufWriter<File>, BinErrors> {
    verify_output_path(out_path, cmd_opts)?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(out_path)?;

    Ok(BufWriter::new(file))
}
