/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use swatch_core::bytestream::ByteWriter;

use crate::constants::{
    PNG_BIT_DEPTH, PNG_COMPRESSION_DEFLATE, PNG_FILTER_METHOD_ADAPTIVE, PNG_IHDR_SIZE,
    PNG_INTERLACE_NONE, PNG_MAX_CHUNK_LENGTH
};
use crate::crc::calc_crc_with_bytes;
use crate::encoder::SolidPngEncoder;
use crate::enums::PngColor;
use crate::error::PngEncodeErrors;

pub(crate) fn write_ihdr(ctx: &SolidPngEncoder, output: &mut Vec<u8>) {
    // dimensions were validated against PNG_MAX_DIMENSION, they fit in a u32
    output.extend_from_slice(&(ctx.options.width() as u32).to_be_bytes());
    output.extend_from_slice(&(ctx.options.height() as u32).to_be_bytes());
    output.push(PNG_BIT_DEPTH);
    output.push(PngColor::RGB.to_int());
    output.push(PNG_COMPRESSION_DEFLATE);
    output.push(PNG_FILTER_METHOD_ADAPTIVE);
    output.push(PNG_INTERLACE_NONE);

    debug_assert_eq!(output.len(), PNG_IHDR_SIZE);
}

// iend is a no-op
pub(crate) fn write_iend(_: &SolidPngEncoder, _: &mut Vec<u8>) {}

/// Write header writes the boilerplate for each png chunk
///
/// It calls a function to fill the chunk payload and then
/// frames it with [`write_chunk`].
///
/// This should be called with the appropriate inner function to write data
pub(crate) fn write_header_fn<T: Write, F: Fn(&SolidPngEncoder, &mut Vec<u8>)>(
    v: &SolidPngEncoder, writer: &mut ByteWriter<T>, name: &[u8; 4], func: F
) -> Result<(), PngEncodeErrors> {
    // a chunk's length comes before its data, so the payload
    // is collected first
    let mut payload = Vec::with_capacity(PNG_IHDR_SIZE);

    (func)(v, &mut payload);

    write_chunk(name, &payload, writer)
}

/// Length field for a chunk carrying `len` bytes
pub(crate) fn chunk_length(len: usize) -> Result<u32, PngEncodeErrors> {
    if len > PNG_MAX_CHUNK_LENGTH {
        return Err(PngEncodeErrors::Overflow(
            "chunk payload longer than 2^31-1 bytes"
        ));
    }
    Ok(len as u32)
}

/// Write a single chunk
///
/// format: length - chunk name - [data] - crc
///
/// Payloads longer than 2^31-1 bytes are rejected before anything is written
pub fn write_chunk<T: Write>(
    name: &[u8; 4], data: &[u8], writer: &mut ByteWriter<T>
) -> Result<(), PngEncodeErrors> {
    let length = chunk_length(data.len())?;
    // write length
    writer.write_u32_be(length)?;
    // write chunk name
    writer.write_all(name)?;
    // write chunk data
    writer.write_all(data)?;
    // crc is a continuous function, so first crc the chunk name
    // and then crc that with the chunk bytes passing in the previous crc

    // equal to crc((chunk.chunk + data) ,u32::MAX))
    let crc = calc_crc_with_bytes(name, u32::MAX);
    let crc = !calc_crc_with_bytes(data, crc);
    writer.write_u32_be(crc)?;

    Ok(())
}

#[test]
fn test_iend_chunk() {
    let mut sink = vec![];
    let mut writer = ByteWriter::new(&mut sink);

    write_chunk(b"IEND", &[], &mut writer).unwrap();

    assert_eq!(
        sink,
        [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
    );
}

#[test]
fn test_chunk_crc_covers_name_and_data() {
    let mut sink = vec![];
    let mut writer = ByteWriter::new(&mut sink);

    write_chunk(b"tEXt", b"abc", &mut writer).unwrap();

    assert_eq!(&sink[..4], &3_u32.to_be_bytes());
    let crc = crate::crc::calc_crc(b"tEXtabc");
    assert_eq!(&sink[11..], &crc.to_be_bytes());
}

#[test]
fn test_chunk_length_limit() {
    assert_eq!(chunk_length(0).unwrap(), 0);
    assert_eq!(chunk_length(PNG_MAX_CHUNK_LENGTH).unwrap(), i32::MAX as u32);
    assert!(matches!(
        chunk_length(PNG_MAX_CHUNK_LENGTH + 1),
        Err(PngEncodeErrors::Overflow(_))
    ));
}
