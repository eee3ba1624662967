/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::create_dir_all;
use std::io::Write;
use std::path::Path;

use clap::ArgMatches;
use log::info;
use swatch_core::color::Rgb;
use swatch_png::icons::{encode_icon_set, icon_color};
use swatch_png::SolidPngEncoder;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_color, get_encoder_options};
use crate::errors::BinErrors;
use crate::file_io::create_output;
use crate::probe_files::probe_input_file;

fn out_path(args: &ArgMatches) -> Result<&Path, BinErrors> {
    args.get_one::<String>("out")
        .map(Path::new)
        .ok_or_else(|| BinErrors::GenericString("No output path".to_string()))
}

fn write_solid(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), BinErrors> {
    let color = get_color(args, Rgb::BLACK);
    let options = get_encoder_options(args);
    let out = out_path(args)?;

    let encoder = SolidPngEncoder::new(color, options);
    // encode before touching the file so bad dimensions leave nothing behind
    let bytes = encoder.encode_to_vec()?;

    let mut writer = create_output(out, cmd_opts)?;
    writer.write_all(&bytes)?;
    writer.flush()?;

    info!("Wrote {} bytes to {out:?}", bytes.len());
    Ok(())
}

fn write_icons(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), BinErrors> {
    let background = args.get_one::<String>("color").map_or("", String::as_str);
    let color = icon_color(background);
    let out = out_path(args)?;

    info!("Icon color for background {background:?} is {color}");

    create_dir_all(out)?;

    for icon in encode_icon_set(color)? {
        let path = out.join(icon.name);

        let mut writer = create_output(&path, cmd_opts)?;
        writer.write_all(&icon.data)?;
        writer.flush()?;

        info!("Wrote {} ({}x{})", path.display(), icon.size, icon.size);
    }
    Ok(())
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), BinErrors> {
    match args.subcommand() {
        Some(("solid", sub_args)) => write_solid(sub_args, cmd_opts),
        Some(("icons", sub_args)) => write_icons(sub_args, cmd_opts),
        Some(("inspect", sub_args)) => probe_input_file(sub_args),
        _ => Err(BinErrors::GenericString(
            "Expected one of solid, icons or inspect".to_string()
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use swatch_png::read_png_info;

    use super::*;
    use crate::cmd_args::create_cmd_args;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("swatch-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn run(argv: &[&str]) -> Result<(), BinErrors> {
        let matches = create_cmd_args().try_get_matches_from(argv).unwrap();
        let opts = crate::cmd_parsers::global_options::parse_options(&matches);
        create_and_exec_workflow_from_cmd(&matches, &opts)
    }

    #[test]
    fn test_solid_command() {
        let dir = scratch_dir("solid");
        create_dir_all(&dir).unwrap();
        let out = dir.join("strip.png");
        let out_str = out.to_str().unwrap();

        run(&["swatch", "-y", "solid", "-c", "#1A2b3C", "-W", "30", "-H", "4", "-o", out_str]).unwrap();

        let data = std::fs::read(&out).unwrap();
        let info = read_png_info(&data).unwrap();
        assert_eq!((info.width, info.height), (30, 4));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_solid_rejects_large_width() {
        let dir = scratch_dir("large");
        create_dir_all(&dir).unwrap();
        let out = dir.join("big.png");
        let out_str = out.to_str().unwrap();

        let result = run(&[
            "swatch", "-y", "solid", "-W", "100", "-H", "1", "--max-width", "64", "-o", out_str
        ]);
        assert!(matches!(result, Err(BinErrors::EncodeErrors(_))));
        assert!(!out.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_icons_command() {
        let dir = scratch_dir("icons");
        let dir_str = dir.to_str().unwrap();

        run(&["swatch", "icons", "-c", "#000000", "-o", dir_str]).unwrap();

        for (name, size) in swatch_png::icons::ICON_SIZES {
            let data = std::fs::read(dir.join(name)).unwrap();
            let info = read_png_info(&data).unwrap();
            assert_eq!((info.width, info.height), (size, size));

            let raster = info.inflate_stored().unwrap();
            assert_eq!(&raster[1..4], &[51, 51, 51]);
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}
