/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use swatch_core::bytestream::ByteIoError;
use swatch_deflate::errors::InflateDecodeErrors;

/// Errors that can occur when encoding an image
///
/// Geometry problems are always reported before a single
/// byte is written to the sink.
pub enum PngEncodeErrors {
    /// Width or height was zero
    ZeroDimensions(usize, usize),
    /// A dimension was above the configured limit.
    /// Carries the dimension name, the limit and the value found
    TooLargeDimensions(&'static str, usize, usize),
    /// The raster does not fit in memory or its stream does not fit in one chunk
    Overflow(&'static str),
    IoErrors(ByteIoError)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions must be non-zero, found width {width} and height {height}"
                )
            }
            Self::TooLargeDimensions(dimension, limit, found) => {
                writeln!(f, "Too large {dimension}, limit is {limit} but found {found}")
            }
            Self::Overflow(reason) => writeln!(f, "Overflow: {reason}"),
            Self::IoErrors(err) => writeln!(f, "{err:?}")
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<ByteIoError> for PngEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PngEncodeErrors::IoErrors(value)
    }
}

/// Errors from reading back the chunks of a png stream
pub enum PngChunkErrors {
    BadSignature,
    /// The stream ended inside a chunk starting at this offset
    Truncated(usize),
    /// Chunk name, expected crc, crc found
    MismatchedCRC([u8; 4], u32, u32),
    /// Chunks are not in an order a decoder accepts
    BadChunkOrder(&'static str),
    BadHeader(&'static str),
    InflateErrors(InflateDecodeErrors)
}

impl Debug for PngChunkErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::Truncated(offset) => {
                writeln!(f, "Stream truncated inside chunk at offset {offset}")
            }
            Self::MismatchedCRC(name, expected, found) => {
                writeln!(
                    f,
                    "CRC mismatch in {} chunk, expected {expected:#010X} but found {found:#010X}",
                    String::from_utf8_lossy(name)
                )
            }
            Self::BadChunkOrder(reason) => writeln!(f, "Bad chunk order: {reason}"),
            Self::BadHeader(reason) => writeln!(f, "Bad IHDR chunk: {reason}"),
            Self::InflateErrors(err) => writeln!(f, "Could not inflate IDAT: {err:?}")
        }
    }
}

impl Display for PngChunkErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PngChunkErrors {}

impl From<InflateDecodeErrors> for PngChunkErrors {
    fn from(value: InflateDecodeErrors) -> Self {
        PngChunkErrors::InflateErrors(value)
    }
}
