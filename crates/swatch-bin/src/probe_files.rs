/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::read;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, warn};
use swatch_core::color::Rgb;
use swatch_png::{read_png_info, PngColor, PngInfo};

use crate::errors::BinErrors;
use crate::serde::{IdatCheck, ProbeReport};

fn check_idat(info: &PngInfo) -> (IdatCheck, Option<Vec<u8>>) {
    match info.inflate_stored() {
        Ok(raster) => {
            let expected = info.expected_raster_size().unwrap_or(0);

            if raster.len() == expected {
                (IdatCheck::Verified, Some(raster))
            } else {
                (IdatCheck::WrongSize(expected, raster.len()), None)
            }
        }
        Err(err) => {
            debug!("IDAT could not be verified: {err:?}");
            (IdatCheck::Unverified, None)
        }
    }
}

/// Return the color shared by every pixel of an unfiltered 8-bit RGB raster
pub(crate) fn solid_color(info: &PngInfo, raster: &[u8]) -> Option<Rgb> {
    if info.color != PngColor::RGB || info.depth != 8 || info.interlace != 0 {
        return None;
    }
    let stride = 1 + info.width as usize * 3;
    let first = raster.get(1..4)?;

    raster
        .chunks_exact(stride)
        .all(|row| row[0] == 0 && row[1..].chunks_exact(3).all(|px| px == first))
        .then(|| Rgb::new(first[0], first[1], first[2]))
}

pub fn build_report<'a>(file: &Path, data: &[u8], info: &'a PngInfo) -> ProbeReport<'a> {
    let (idat, raster) = check_idat(info);

    let solid_color = raster.as_deref().and_then(|raster| solid_color(info, raster));

    ProbeReport {
        file: OsString::from(file),
        size: data.len() as u64,
        info,
        idat,
        solid_color
    }
}

/// Read a png, check it and print what was found to standard output
pub fn probe_input_file(args: &ArgMatches) -> Result<(), BinErrors> {
    let in_file = args
        .get_one::<String>("in")
        .ok_or_else(|| BinErrors::GenericString("No input file".to_string()))?;

    let path = Path::new(in_file);

    if !path.is_file() {
        return Err(BinErrors::GenericString(format!(
            "Path {path:?} is not a file"
        )));
    }
    let data = read(path)?;
    let info = read_png_info(&data)?;
    let report = build_report(path, &data, &info);

    if report.idat != IdatCheck::Verified {
        warn!("IDAT of {path:?} could not be fully verified");
    }

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}: {} bytes", path.display(), report.size);
    println!(
        "  {}x{}, {} bit {:?}, interlace {}",
        info.width, info.height, info.depth, info.color, info.interlace
    );
    for chunk in &info.chunks {
        println!(
            "  {} {:>8} bytes crc {:#010X}",
            String::from_utf8_lossy(&chunk.chunk),
            chunk.length,
            chunk.crc
        );
    }
    println!("  idat: {:?}", report.idat);

    if let Some(color) = report.solid_color {
        println!("  solid color {color}");
    }
    Ok(())
}
