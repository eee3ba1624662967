/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reader for zlib streams made of stored blocks
//!
//! This is the inverse of the encoder, it exists to verify
//! streams without pulling in a full inflate implementation.
//! Any Huffman coded block is reported as unsupported.

use log::trace;

use crate::adler::Adler32;
use crate::constants::{
    DEFLATE_BLOCKTYPE_UNCOMPRESSED, ZLIB_CINFO_32K_WINDOW, ZLIB_CM_DEFLATE, ZLIB_FDICT
};
use crate::errors::{DecodeErrorStatus, InflateDecodeErrors};

/// Decode a zlib stream whose deflate blocks are all stored blocks
///
/// The header check bits, the LEN/NLEN pair of every block and
/// the trailing Adler-32 are all verified. The stream must end
/// right after the Adler-32.
pub fn decode_zlib_stored(data: &[u8]) -> Result<Vec<u8>, InflateDecodeErrors> {
    if data.len() < 2 {
        return Err(InflateDecodeErrors::new_with_error(
            DecodeErrorStatus::InsufficientData
        ));
    }
    let header = u16::from_be_bytes([data[0], data[1]]);

    if header % 31 != 0 {
        return Err(InflateDecodeErrors::new_with_error(
            DecodeErrorStatus::CorruptData
        ));
    }
    let cm = (header >> 8) & 0xF;
    let cinfo = header >> 12;

    if cm != ZLIB_CM_DEFLATE || cinfo > ZLIB_CINFO_32K_WINDOW || header & ZLIB_FDICT != 0 {
        return Err(InflateDecodeErrors::new_with_error(
            DecodeErrorStatus::UnsupportedHeader(header)
        ));
    }

    let mut output = Vec::with_capacity(data.len());
    let mut position = 2;
    let mut hasher = Adler32::new();

    loop {
        let Some(&block_header) = data.get(position) else {
            return Err(InflateDecodeErrors::new(
                DecodeErrorStatus::InsufficientData,
                output
            ));
        };
        let is_final = block_header & 1 == 1;
        let btype = (block_header >> 1) & 0b11;

        if btype != DEFLATE_BLOCKTYPE_UNCOMPRESSED {
            return Err(InflateDecodeErrors::new(
                DecodeErrorStatus::UnsupportedBlockType(btype),
                output
            ));
        }
        let Some(lengths) = data.get(position + 1..position + 5) else {
            return Err(InflateDecodeErrors::new(
                DecodeErrorStatus::InsufficientData,
                output
            ));
        };
        let len = u16::from_le_bytes([lengths[0], lengths[1]]);
        let nlen = u16::from_le_bytes([lengths[2], lengths[3]]);

        if len != !nlen {
            return Err(InflateDecodeErrors::new(
                DecodeErrorStatus::MismatchedLen(len, nlen),
                output
            ));
        }
        position += 5;

        let end = position + usize::from(len);

        let Some(block) = data.get(position..end) else {
            return Err(InflateDecodeErrors::new(
                DecodeErrorStatus::InsufficientData,
                output
            ));
        };
        trace!("stored block: {len} bytes, final: {is_final}");

        hasher.update(block);
        output.extend_from_slice(block);
        position = end;

        if is_final {
            break;
        }
    }

    let Some(trailer) = data.get(position..position + 4) else {
        return Err(InflateDecodeErrors::new(
            DecodeErrorStatus::InsufficientData,
            output
        ));
    };
    let expected = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let found = hasher.finish();

    if expected != found {
        return Err(InflateDecodeErrors::new(
            DecodeErrorStatus::MismatchedAdler(expected, found),
            output
        ));
    }
    let extra = data.len() - (position + 4);

    if extra != 0 {
        return Err(InflateDecodeErrors::new(
            DecodeErrorStatus::TrailingData(extra),
            output
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeflateEncoder;

    #[test]
    fn test_decode_empty() {
        let stream = [0x78, 0x01, 0x01, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(decode_zlib_stored(&stream).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_bad_nlen() {
        let mut stream = DeflateEncoder::new(b"abcd").encode_zlib();
        stream[5] ^= 1;

        let err = decode_zlib_stored(&stream).unwrap_err();
        assert!(matches!(err.error, DecodeErrorStatus::MismatchedLen(4, _)));
    }

    #[test]
    fn test_bad_adler() {
        let mut stream = DeflateEncoder::new(b"abcd").encode_zlib();
        let last = stream.len() - 1;
        stream[last] ^= 0xFF;

        let err = decode_zlib_stored(&stream).unwrap_err();
        assert!(matches!(err.error, DecodeErrorStatus::MismatchedAdler(_, _)));
        // the payload itself was intact
        assert_eq!(err.data, b"abcd");
    }

    #[test]
    fn test_huffman_block_rejected() {
        // fixed huffman block, BTYPE = 01
        let stream = [0x78, 0x01, 0x03, 0x00];
        let err = decode_zlib_stored(&stream).unwrap_err();
        assert!(err.error == DecodeErrorStatus::UnsupportedBlockType(1));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut stream = DeflateEncoder::new(b"abcd").encode_zlib();
        stream.extend_from_slice(&[0, 0]);

        let err = decode_zlib_stored(&stream).unwrap_err();
        assert!(err.error == DecodeErrorStatus::TrailingData(2));
        assert_eq!(err.data, b"abcd");
    }

    #[test]
    fn test_truncated() {
        let stream = DeflateEncoder::new(b"abcdef").encode_zlib();
        let err = decode_zlib_stored(&stream[..9]).unwrap_err();
        assert!(err.error == DecodeErrorStatus::InsufficientData);
    }
}
