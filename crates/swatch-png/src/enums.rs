/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types the encoder writes or the reader
/// needs to tell apart, see https://www.w3.org/TR/2003/REC-PNG-20031110/
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    PLTE,
    IDAT,
    IEND,
    unkn
}

impl PngChunkType {
    pub const fn from_name(name: &[u8; 4]) -> PngChunkType {
        match name {
            b"IHDR" => Self::IHDR,
            b"PLTE" => Self::PLTE,
            b"IDAT" => Self::IDAT,
            b"IEND" => Self::IEND,
            _ => Self::unkn
        }
    }

    /// Return the four byte chunk name,
    /// or `None` for chunks we don't know
    pub const fn name(self) -> Option<&'static [u8; 4]> {
        match self {
            Self::IHDR => Some(b"IHDR"),
            Self::PLTE => Some(b"PLTE"),
            Self::IDAT => Some(b"IDAT"),
            Self::IEND => Some(b"IEND"),
            Self::unkn => None
        }
    }
}

/// Return true if a chunk name marks an ancillary chunk,
/// i.e one a decoder may safely skip
pub const fn is_ancillary(name: &[u8; 4]) -> bool {
    name[0] & (1 << 5) != 0
}

/// Per scanline filter type
///
/// Rows of a single color gain nothing from filtering, so only
/// `None` is ever written
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FilterMethod {
    #[default]
    None
}

impl FilterMethod {
    pub const fn to_int(self) -> u8 {
        match self {
            Self::None => 0
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PngColor {
    Luma,
    Palette,
    LumaA,
    #[default]
    RGB,
    RGBA
}

impl PngColor {
    pub const fn num_components(self) -> usize {
        match self {
            PngColor::Luma => 1,
            PngColor::Palette => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4
        }
    }
    pub const fn from_int(int: u8) -> Option<PngColor> {
        match int {
            0 => Some(Self::Luma),
            2 => Some(Self::RGB),
            3 => Some(Self::Palette),
            4 => Some(Self::LumaA),
            6 => Some(Self::RGBA),
            _ => None
        }
    }
    pub const fn to_int(self) -> u8 {
        match self {
            Self::Luma => 0,
            Self::RGB => 2,
            Self::Palette => 3,
            Self::LumaA => 4,
            Self::RGBA => 6
        }
    }
}

#[test]
fn test_chunk_names() {
    assert_eq!(PngChunkType::from_name(b"IDAT"), PngChunkType::IDAT);
    assert_eq!(PngChunkType::from_name(b"tEXt"), PngChunkType::unkn);
    assert_eq!(PngChunkType::IEND.name(), Some(b"IEND"));
    assert!(is_ancillary(b"tEXt"));
    assert!(!is_ancillary(b"IHDR"));
}
