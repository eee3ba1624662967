//! A png encoder for single color images
//!
//! This crate writes valid ISO/IEC 15948:2003 (E) png images where every
//! pixel has the same 8-bit RGB color, with no dependency on an external
//! image or compression library.
//!
//! The output is always
//! - the 8 byte png signature
//! - an `IHDR` chunk, 8-bit truecolor, not interlaced
//! - one `IDAT` chunk holding a zlib stream of stored deflate blocks
//! - an empty `IEND` chunk
//!
//! # Usage
//! Add the library to `Cargo.toml`
//!
//! ```toml
//! swatch-png = "0.1"
//! ```
//!
//! #### Encode an image
//!
//!```
//! use swatch_core::color::Rgb;
//! use swatch_png::create_solid_image;
//!
//! let png = create_solid_image(58, 58, Rgb::new(229, 9, 20)).unwrap();
//!```
//!
//! #### Encode with custom limits into a writer
//!
//!```no_run
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! use swatch_core::color::{parse_color_or, Rgb};
//! use swatch_core::options::EncoderOptions;
//! use swatch_png::SolidPngEncoder;
//!
//! let color = parse_color_or("#1A2B3C", Rgb::BLACK);
//! let options = EncoderOptions::new(320, 64).set_max_width(1024);
//!
//! let file = BufWriter::new(File::create("strip.png").unwrap());
//! SolidPngEncoder::new(color, options).encode(file).unwrap();
//!```
//!
//! # Checking output
//!
//! [`read_png_info`] walks the chunks of a stream, verifying their crcs
//! and order. It is not a decoder, but together with
//! [`PngInfo::inflate_stored`] it is enough to check what the encoder wrote.

pub use chunks::{read_png_info, ChunkReader, ChunkSummary, PngChunk, PngInfo};
pub use encoder::{create_solid_image, SolidPngEncoder};
pub use enums::{FilterMethod, PngChunkType, PngColor};
pub use raster::build_solid_raster;
pub use swatch_core;

mod chunks;
mod constants;
pub mod crc;
mod encoder;
mod enums;
pub mod error;
mod headers;
pub mod icons;
mod raster;

pub use constants::PNG_SIGNATURE;
pub use headers::writers::write_chunk;
