use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use swatch_core::color::Rgb;
use swatch_png::{ChunkSummary, PngInfo};

/// Outcome of checking the IDAT stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IdatCheck {
    /// Stored blocks, adler matched and the raster has the expected size
    Verified,
    /// Decompressed fine but to the wrong number of bytes
    WrongSize(usize, usize),
    /// Stored block layout or adler failed, or the stream is Huffman coded
    Unverified
}

pub struct ProbeReport<'a> {
    pub file:        OsString,
    pub size:        u64,
    pub info:        &'a PngInfo,
    pub idat:        IdatCheck,
    /// Set when every pixel of an 8-bit RGB image has the same color
    pub solid_color: Option<Rgb>
}

struct Chunk<'a>(&'a ChunkSummary);

impl<'a> Serialize for Chunk<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Chunk", 3)?;

        state.serialize_field("name", &String::from_utf8_lossy(&self.0.chunk))?;
        state.serialize_field("length", &self.0.length)?;
        state.serialize_field("crc", &format!("{:#010X}", self.0.crc))?;

        state.end()
    }
}

impl<'a> Serialize for ProbeReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeReport", 10)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.info.width)?;
        state.serialize_field("height", &self.info.height)?;
        state.serialize_field("depth", &self.info.depth)?;
        state.serialize_field("color", &format!("{:?}", self.info.color))?;
        state.serialize_field("interlace", &self.info.interlace)?;

        let chunks: Vec<Chunk> = self.info.chunks.iter().map(Chunk).collect();
        state.serialize_field("chunks", &chunks)?;

        let idat = match self.idat {
            IdatCheck::Verified => "verified".to_string(),
            IdatCheck::WrongSize(expected, found) => {
                format!("expected {expected} raster bytes but found {found}")
            }
            IdatCheck::Unverified => "unverified".to_string()
        };
        state.serialize_field("idat", &idat)?;
        state.serialize_field("solid_color", &self.solid_color.map(|x| x.to_string()))?;

        state.end()
    }
}
