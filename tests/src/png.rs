/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use swatch_core::color::{parse_color_or, Rgb};
use swatch_png::{create_solid_image, read_png_info};

use crate::{hash, load_entries, TestEntry};

fn decode_ref(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    (info.width, info.height, buf)
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_png() {
    let entries = load_entries("solid.json");

    let mut error = false;
    let mut files: Vec<TestEntry> = Vec::new();

    for entry in &entries {
        let color = parse_color_or(&entry.color, Rgb::BLACK);
        let contents = create_solid_image(entry.width, entry.height, color).unwrap();

        let found = hash(&contents);

        if found != entry.crc || contents.len() != entry.size {
            error = true;
            files.push(entry.to_owned());
            // report error
            let err = format!(
                "Hash mismatch for {}\nExpected {} ({} bytes) but found {} ({} bytes)\nConfig:{:#?}",
                entry.name,
                entry.crc,
                entry.size,
                found,
                contents.len(),
                entry
            );
            eprintln!("{}\n", err)
        }
    }
    if error {
        panic!("Errors found during test encoding\n {:#?}", files);
    }
}

#[test]
fn test_png_crate_decodes_entries() {
    for entry in load_entries("solid.json") {
        let color = parse_color_or(&entry.color, Rgb::BLACK);
        let contents = create_solid_image(entry.width, entry.height, color).unwrap();

        let (width, height, pixels) = decode_ref(&contents);

        assert_eq!((width, height), (entry.width, entry.height), "{}", entry.name);
        assert!(
            pixels.chunks_exact(3).all(|px| px == color.to_array()),
            "pixel mismatch in {}",
            entry.name
        );
        // and our own reader agrees on the layout
        let info = read_png_info(&contents).unwrap();
        assert_eq!(info.chunks.len(), 3);
    }
}
