/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// A struct returned when decompression fails
pub struct InflateDecodeErrors {
    /// reason why decompression fails
    pub error: DecodeErrorStatus,
    /// Data up until that decompression stage
    pub data:  Vec<u8>
}

impl InflateDecodeErrors {
    /// Create a new decode wrapper with data being
    /// how many bytes we actually decoded before hitting an error
    pub fn new(error: DecodeErrorStatus, data: Vec<u8>) -> InflateDecodeErrors {
        InflateDecodeErrors { error, data }
    }
    /// Create a new decode wrapper with an empty vector
    pub fn new_with_error(error: DecodeErrorStatus) -> InflateDecodeErrors {
        InflateDecodeErrors::new(error, vec![])
    }
}

impl Debug for InflateDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self.error)
    }
}

impl Display for InflateDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for InflateDecodeErrors {}

#[derive(Eq, PartialEq)]
pub enum DecodeErrorStatus {
    InsufficientData,
    CorruptData,
    /// Bytes left over after the Adler-32 trailer
    TrailingData(usize),
    /// Header fields we can't handle, e.g a preset dictionary
    UnsupportedHeader(u16),
    /// A block type other than stored
    UnsupportedBlockType(u8),
    /// LEN and NLEN of a stored block disagree
    MismatchedLen(u16, u16),
    MismatchedAdler(u32, u32)
}

impl Debug for DecodeErrorStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData => writeln!(f, "Insufficient data"),
            Self::CorruptData => writeln!(f, "Corrupt data"),
            Self::TrailingData(extra) => {
                writeln!(f, "{extra} unexpected bytes after the Adler-32 trailer")
            }
            Self::UnsupportedHeader(header) => {
                writeln!(f, "Unsupported zlib header {header:#06X}")
            }
            Self::UnsupportedBlockType(btype) => {
                writeln!(f, "Block type {btype} is not a stored block")
            }
            Self::MismatchedLen(len, nlen) => {
                writeln!(f, "Stored block LEN {len:#06X} does not match NLEN {nlen:#06X}")
            }
            Self::MismatchedAdler(expected, found) => {
                writeln!(f, "Mismatched Adler, expected {expected} but found {found}")
            }
        }
    }
}
