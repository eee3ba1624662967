/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading back png chunks
//!
//! A small reader used to check encoder output. It walks the
//! chunk list, verifies every crc and the order decoders insist on,
//! and collects the IHDR fields and the IDAT stream.
use log::trace;
use swatch_deflate::decode_zlib_stored;

use crate::constants::{PNG_IHDR_SIZE, PNG_SIGNATURE};
use crate::crc::calc_crc_with_bytes;
use crate::enums::{is_ancillary, PngChunkType, PngColor};
use crate::error::PngChunkErrors;

/// A single chunk borrowed from the stream
#[derive(Copy, Clone, Debug)]
pub struct PngChunk<'a> {
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4],
    pub data:       &'a [u8],
    pub crc:        u32
}

/// Iterates over the chunks of a png stream, checking crcs as it goes
pub struct ChunkReader<'a> {
    data:     &'a [u8],
    position: usize,
    finished: bool
}

impl<'a> ChunkReader<'a> {
    /// Create a reader, checking the png signature
    pub fn new(data: &'a [u8]) -> Result<ChunkReader<'a>, PngChunkErrors> {
        match data.get(..8) {
            Some(sig) if sig == PNG_SIGNATURE.to_be_bytes() => Ok(ChunkReader {
                data,
                position: 8,
                finished: false
            }),
            _ => Err(PngChunkErrors::BadSignature)
        }
    }

    /// Offset of the next chunk
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes after the position the reader stopped at
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    fn read_chunk(&mut self) -> Result<PngChunk<'a>, PngChunkErrors> {
        let start = self.position;

        let header = self
            .data
            .get(start..start + 8)
            .ok_or(PngChunkErrors::Truncated(start))?;

        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let chunk = [header[4], header[5], header[6], header[7]];

        // the length comes from the stream, a hostile one may overflow usize
        let data_start = start + 8;
        let data_end = data_start
            .checked_add(length)
            .ok_or(PngChunkErrors::Truncated(start))?;
        let crc_end = data_end
            .checked_add(4)
            .ok_or(PngChunkErrors::Truncated(start))?;

        let data = self
            .data
            .get(data_start..data_end)
            .ok_or(PngChunkErrors::Truncated(start))?;

        let crc_bytes = self
            .data
            .get(data_end..crc_end)
            .ok_or(PngChunkErrors::Truncated(start))?;

        let expected = u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);
        let found = !calc_crc_with_bytes(data, calc_crc_with_bytes(&chunk, u32::MAX));

        if expected != found {
            return Err(PngChunkErrors::MismatchedCRC(chunk, expected, found));
        }
        self.position = crc_end;

        trace!("Chunk {} of {length} bytes", String::from_utf8_lossy(&chunk));

        Ok(PngChunk {
            length,
            chunk_type: PngChunkType::from_name(&chunk),
            chunk,
            data,
            crc: expected
        })
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Result<PngChunk<'a>, PngChunkErrors>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.position >= self.data.len() {
            return None;
        }
        let result = self.read_chunk();

        match &result {
            Ok(chunk) if chunk.chunk_type == PngChunkType::IEND => self.finished = true,
            Err(_) => self.finished = true,
            _ => ()
        }
        Some(result)
    }
}

/// Name, length and crc of a chunk
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChunkSummary {
    pub chunk:  [u8; 4],
    pub length: usize,
    pub crc:    u32
}

/// What [`read_png_info`] found in a stream
#[derive(Clone, Debug)]
pub struct PngInfo {
    pub width:     u32,
    pub height:    u32,
    pub depth:     u8,
    pub color:     PngColor,
    pub interlace: u8,
    pub chunks:    Vec<ChunkSummary>,
    /// The concatenated IDAT payloads
    pub idat:      Vec<u8>
}

impl PngInfo {
    /// Decompress the IDAT stream, which must consist of stored blocks
    pub fn inflate_stored(&self) -> Result<Vec<u8>, PngChunkErrors> {
        Ok(decode_zlib_stored(&self.idat)?)
    }

    /// Size the decompressed IDAT stream must have for a non interlaced image
    pub fn expected_raster_size(&self) -> Option<usize> {
        let bits_per_pixel = usize::from(self.depth) * self.color.num_components();
        let row_bytes = (self.width as usize)
            .checked_mul(bits_per_pixel)?
            .div_ceil(8)
            .checked_add(1)?;

        row_bytes.checked_mul(self.height as usize)
    }
}

fn parse_ihdr(data: &[u8]) -> Result<(u32, u32, u8, PngColor, u8), PngChunkErrors> {
    if data.len() != PNG_IHDR_SIZE {
        return Err(PngChunkErrors::BadHeader("IHDR must be 13 bytes"));
    }
    let width = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let height = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);

    if width == 0 || height == 0 {
        return Err(PngChunkErrors::BadHeader("zero width or height"));
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(PngChunkErrors::BadHeader("dimensions above 2^31-1"));
    }
    let depth = data[8];
    let color = PngColor::from_int(data[9]).ok_or(PngChunkErrors::BadHeader("unknown color type"))?;

    if !matches!(depth, 1 | 2 | 4 | 8 | 16) {
        return Err(PngChunkErrors::BadHeader("unknown bit depth"));
    }
    if data[10] != 0 {
        return Err(PngChunkErrors::BadHeader("unknown compression method"));
    }
    if data[11] != 0 {
        return Err(PngChunkErrors::BadHeader("unknown filter method"));
    }
    if data[12] > 1 {
        return Err(PngChunkErrors::BadHeader("unknown interlace method"));
    }
    Ok((width, height, depth, color, data[12]))
}

/// Walk every chunk of a png stream and collect its header fields
///
/// # Errors
/// - Bad signature or crc, truncated chunks
/// - IHDR not first, IDAT missing or not contiguous, IEND missing
///   or followed by more data
/// - Unknown critical chunks (PLTE is allowed)
pub fn read_png_info(data: &[u8]) -> Result<PngInfo, PngChunkErrors> {
    let mut reader = ChunkReader::new(data)?;

    let first = reader
        .next()
        .ok_or(PngChunkErrors::BadChunkOrder("no chunks after signature"))??;

    if first.chunk_type != PngChunkType::IHDR {
        return Err(PngChunkErrors::BadChunkOrder("IHDR must be the first chunk"));
    }
    let (width, height, depth, color, interlace) = parse_ihdr(first.data)?;

    let mut chunks = vec![ChunkSummary {
        chunk:  first.chunk,
        length: first.length,
        crc:    first.crc
    }];
    let mut idat = Vec::new();
    let mut seen_idat = false;
    let mut idat_ended = false;
    let mut seen_iend = false;

    for chunk in reader.by_ref() {
        let chunk = chunk?;

        chunks.push(ChunkSummary {
            chunk:  chunk.chunk,
            length: chunk.length,
            crc:    chunk.crc
        });

        match chunk.chunk_type {
            PngChunkType::IHDR => {
                return Err(PngChunkErrors::BadChunkOrder("more than one IHDR"));
            }
            PngChunkType::IDAT => {
                if idat_ended {
                    return Err(PngChunkErrors::BadChunkOrder("IDAT chunks are not contiguous"));
                }
                seen_idat = true;
                idat.extend_from_slice(chunk.data);
            }
            PngChunkType::IEND => {
                if !chunk.data.is_empty() {
                    return Err(PngChunkErrors::BadChunkOrder("IEND must be empty"));
                }
                seen_iend = true;
            }
            PngChunkType::PLTE => {
                if seen_idat {
                    return Err(PngChunkErrors::BadChunkOrder("PLTE after IDAT"));
                }
            }
            PngChunkType::unkn => {
                if !is_ancillary(&chunk.chunk) {
                    return Err(PngChunkErrors::BadChunkOrder("unknown critical chunk"));
                }
                idat_ended |= seen_idat;
            }
        }
    }
    if !seen_idat {
        return Err(PngChunkErrors::BadChunkOrder("no IDAT chunk"));
    }
    if !seen_iend {
        return Err(PngChunkErrors::BadChunkOrder("no IEND chunk"));
    }
    if !reader.remaining().is_empty() {
        return Err(PngChunkErrors::BadChunkOrder("data after IEND"));
    }

    Ok(PngInfo {
        width,
        height,
        depth,
        color,
        interlace,
        chunks,
        idat
    })
}

#[cfg(test)]
mod tests {
    use swatch_core::color::Rgb;

    use super::*;
    use crate::create_solid_image;

    #[test]
    fn test_reads_encoder_output() {
        let png = create_solid_image(29, 29, Rgb::new(10, 20, 30)).unwrap();
        let info = read_png_info(&png).unwrap();

        assert_eq!((info.width, info.height, info.depth), (29, 29, 8));
        assert_eq!(info.color, PngColor::RGB);

        let names: Vec<[u8; 4]> = info.chunks.iter().map(|x| x.chunk).collect();
        assert_eq!(names, [*b"IHDR", *b"IDAT", *b"IEND"]);

        let raster = info.inflate_stored().unwrap();
        assert_eq!(Some(raster.len()), info.expected_raster_size());
    }

    #[test]
    fn test_bad_crc() {
        let mut png = create_solid_image(2, 2, Rgb::BLACK).unwrap();
        // signature, IHDR length and name, IHDR payload
        let crc_pos = 8 + 8 + 13;
        png[crc_pos] ^= 0x01;

        assert!(matches!(
            read_png_info(&png),
            Err(PngChunkErrors::MismatchedCRC(name, _, _)) if &name == b"IHDR"
        ));
    }

    #[test]
    fn test_bad_signature() {
        assert!(matches!(
            read_png_info(b"GIF89a......"),
            Err(PngChunkErrors::BadSignature)
        ));
    }

    #[test]
    fn test_trailing_data() {
        let mut png = create_solid_image(2, 2, Rgb::BLACK).unwrap();
        png.extend_from_slice(b"junk");

        assert!(matches!(
            read_png_info(&png),
            Err(PngChunkErrors::BadChunkOrder("data after IEND"))
        ));
    }

    #[test]
    fn test_truncated() {
        let png = create_solid_image(2, 2, Rgb::BLACK).unwrap();
        let cut = &png[..png.len() - 2];

        assert!(matches!(
            read_png_info(cut),
            Err(PngChunkErrors::Truncated(_))
        ));
    }

    #[test]
    fn test_huge_chunk_length() {
        let mut png = PNG_SIGNATURE.to_be_bytes().to_vec();
        png.extend_from_slice(&u32::MAX.to_be_bytes());
        png.extend_from_slice(b"IHDR");

        let mut reader = ChunkReader::new(&png).unwrap();
        assert!(matches!(
            reader.next(),
            Some(Err(PngChunkErrors::Truncated(8)))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_idat_with_trailing_bytes_does_not_inflate() {
        let png = create_solid_image(3, 3, Rgb::BLACK).unwrap();
        let mut info = read_png_info(&png).unwrap();
        info.idat.push(0);

        assert!(matches!(
            info.inflate_stored(),
            Err(PngChunkErrors::InflateErrors(_))
        ));
    }
}
