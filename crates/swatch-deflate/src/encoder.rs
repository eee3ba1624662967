/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::adler::calc_adler_hash;
use crate::constants::{
    DEFLATE_BLOCKTYPE_UNCOMPRESSED, DEFLATE_MAX_STORED_BLOCK, ZLIB_CINFO_32K_WINDOW,
    ZLIB_CM_DEFLATE
};

/// How the encoder lays out deflate blocks
///
/// Only stored blocks are written, the bytes are copied through
/// untouched and framed with their length.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DeflateEncodingStrategy {
    #[default]
    NoCompression
}

impl DeflateEncodingStrategy {
    /// The FLEVEL hint stored in the zlib header
    const fn to_level(self) -> u8 {
        match self {
            Self::NoCompression => 0
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct DeflateEncodingOptions {
    strategy: DeflateEncodingStrategy
}

impl DeflateEncodingOptions {
    pub const fn strategy(&self) -> DeflateEncodingStrategy {
        self.strategy
    }
    pub fn set_strategy(mut self, strategy: DeflateEncodingStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

pub struct DeflateEncoder<'a> {
    data:    &'a [u8],
    options: DeflateEncodingOptions
}

impl<'a> DeflateEncoder<'a> {
    /// Create a new deflate encoder over `data`
    pub fn new(data: &'a [u8]) -> DeflateEncoder<'a> {
        DeflateEncoder::new_with_options(data, DeflateEncodingOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DeflateEncodingOptions) -> DeflateEncoder<'a> {
        DeflateEncoder { data, options }
    }

    /// Number of stored blocks `len` bytes are split into,
    /// empty input still needs one block
    pub const fn stored_block_count(len: usize) -> usize {
        if len == 0 {
            1
        } else {
            len.div_ceil(DEFLATE_MAX_STORED_BLOCK)
        }
    }

    /// Exact size of the zlib stream [`encode_zlib`](Self::encode_zlib) returns
    pub const fn zlib_stream_size(len: usize) -> usize {
        // header + 5 bytes per block + data + adler
        2 + 5 * Self::stored_block_count(len) + len + 4
    }

    fn zlib_header(&self) -> [u8; 2] {
        let level_hint = self.options.strategy.to_level();

        let mut hdr = (ZLIB_CM_DEFLATE << 8) | (ZLIB_CINFO_32K_WINDOW << 12);

        hdr |= u16::from(level_hint) << 6;
        // FCHECK, header as a big endian u16 must be a multiple of 31
        hdr |= 31 - (hdr % 31);

        hdr.to_be_bytes()
    }

    /// Append the data as a sequence of stored blocks
    fn encode_no_compression(&self, output: &mut Vec<u8>) {
        // A zero-length input still needs a final block
        // for the output to be a valid deflate stream
        if self.data.is_empty() {
            write_stored_block(output, &[], true);
            return;
        }
        let mut blocks = self.data.chunks(DEFLATE_MAX_STORED_BLOCK).peekable();

        while let Some(block) = blocks.next() {
            write_stored_block(output, block, blocks.peek().is_none());
        }
    }

    /// Encode the data into a raw deflate stream, without zlib framing
    pub fn encode_deflate(&mut self) -> Vec<u8> {
        let mut output = Vec::with_capacity(Self::zlib_stream_size(self.data.len()) - 6);

        match self.options.strategy {
            DeflateEncodingStrategy::NoCompression => self.encode_no_compression(&mut output)
        }
        output
    }

    /// Encode the data into a zlib stream
    ///
    /// The stream is the two byte header, the deflate blocks and
    /// the big endian Adler-32 of the uncompressed data
    pub fn encode_zlib(&mut self) -> Vec<u8> {
        let mut output = Vec::with_capacity(Self::zlib_stream_size(self.data.len()));

        output.extend_from_slice(&self.zlib_header());

        match self.options.strategy {
            DeflateEncodingStrategy::NoCompression => self.encode_no_compression(&mut output)
        }
        // add adler hash
        let hash = calc_adler_hash(self.data);
        output.extend_from_slice(&hash.to_be_bytes());

        trace!(
            "zlib: {} input bytes, {} stored blocks, {} output bytes",
            self.data.len(),
            Self::stored_block_count(self.data.len()),
            output.len()
        );
        output
    }
}

fn write_stored_block(output: &mut Vec<u8>, block: &[u8], is_final: bool) {
    debug_assert!(block.len() <= DEFLATE_MAX_STORED_BLOCK);
    // BFINAL and BTYPE, the stream is byte aligned here
    // so this is always exactly one byte
    output.push(u8::from(is_final) | (DEFLATE_BLOCKTYPE_UNCOMPRESSED << 1));

    let len = block.len() as u16;

    // LEN and NLEN
    output.extend_from_slice(&len.to_le_bytes());
    output.extend_from_slice(&(!len).to_le_bytes());
    output.extend_from_slice(block);
}
