/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use swatch_core::color::Rgb;
use swatch_deflate::DeflateEncoder;
use swatch_png::{build_solid_raster, create_solid_image, read_png_info};

fn decode_writer_flate(bytes: &[u8]) -> Vec<u8> {
    let mut writer = Vec::new();

    let mut deflater = flate2::read::ZlibDecoder::new(bytes);

    deflater.read_to_end(&mut writer).unwrap();

    writer
}

#[test]
fn test_idat_inflates_to_raster() {
    for size in [1, 2, 29, 58, 87] {
        let color = Rgb::new(size as u8, 255 - size as u8, 7);
        let png = create_solid_image(size, size, color).unwrap();
        let info = read_png_info(&png).unwrap();

        let raster = build_solid_raster(size as usize, size as usize, color).unwrap();

        assert!(decode_writer_flate(&info.idat) == raster, "flate mismatch at {size}");
        assert!(info.inflate_stored().unwrap() == raster, "stored mismatch at {size}");
    }
}

#[test]
fn test_block_boundary() {
    // exactly one full block
    let one = DeflateEncoder::new(&[0xAB; 65535]).encode_zlib();
    assert_eq!(one[2], 0x01);
    assert_eq!(one.len(), 2 + 5 + 65535 + 4);

    // one byte over, a full non final block and a final one byte block
    let two = DeflateEncoder::new(&[0xAB; 65536]).encode_zlib();
    assert_eq!(two[2], 0x00);
    assert_eq!(&two[3..7], &[0xFF, 0xFF, 0x00, 0x00]);
    assert_eq!(&two[7 + 65535..7 + 65535 + 5], &[0x01, 0x01, 0x00, 0xFE, 0xFF]);

    assert_eq!(decode_writer_flate(&one), vec![0xAB; 65535]);
    assert_eq!(decode_writer_flate(&two), vec![0xAB; 65536]);
}

#[test]
fn test_empty_stream() {
    let empty = DeflateEncoder::new(&[]).encode_zlib();
    assert_eq!(
        empty,
        [0x78, 0x01, 0x01, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01]
    );
    assert!(decode_writer_flate(&empty).is_empty());
}
