/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Store-mode zlib streams
//!
//! This crate writes zlib streams made entirely of stored
//! (uncompressed) deflate blocks, and reads them back.
//!
//! Output is larger than the input by a few bytes per 64KB, which
//! is fine for the tiny single color images it is used for and keeps
//! the encoder trivially correct.
//!
//! # Usage
//! ```
//! use swatch_deflate::{decode_zlib_stored, DeflateEncoder};
//!
//! let data = b"hello world";
//! let stream = DeflateEncoder::new(data).encode_zlib();
//! assert_eq!(decode_zlib_stored(&stream).unwrap(), data);
//! ```
pub use crate::adler::{calc_adler_hash, Adler32};
pub use crate::decoder::decode_zlib_stored;
pub use crate::encoder::{DeflateEncoder, DeflateEncodingOptions, DeflateEncodingStrategy};

pub mod adler;
mod constants;
mod decoder;
mod encoder;
pub mod errors;
