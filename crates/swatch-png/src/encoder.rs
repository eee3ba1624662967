/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::{debug, trace};
use swatch_core::bytestream::ByteWriter;
use swatch_core::color::Rgb;
use swatch_core::options::{EncoderOptions, PNG_MAX_DIMENSION};
use swatch_deflate::DeflateEncoder;

use crate::constants::PNG_SIGNATURE;
use crate::error::PngEncodeErrors;
use crate::headers::writers::{
    chunk_length, write_chunk, write_header_fn, write_iend, write_ihdr
};
use crate::raster::build_solid_raster;

/// An encoder for images where every pixel has the same color
///
/// The output is always an 8-bit RGB, non interlaced png made of
/// exactly three chunks, `IHDR`, `IDAT` and `IEND`. The pixel data
/// is stored uncompressed inside the zlib stream.
pub struct SolidPngEncoder {
    pub(crate) options: EncoderOptions,
    pub(crate) color:   Rgb
}

impl SolidPngEncoder {
    /// Create a new encoder filling an image of the dimensions
    /// in `options` with `color`
    pub fn new(color: Rgb, options: EncoderOptions) -> SolidPngEncoder {
        SolidPngEncoder { options, color }
    }

    pub const fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    fn check_dimensions(&self) -> Result<(), PngEncodeErrors> {
        let (width, height) = (self.options.width(), self.options.height());

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions(width, height));
        }
        let max_width = self.options.max_width().min(PNG_MAX_DIMENSION);
        let max_height = self.options.max_height().min(PNG_MAX_DIMENSION);

        if width > max_width {
            return Err(PngEncodeErrors::TooLargeDimensions(
                "width", max_width, width
            ));
        }
        if height > max_height {
            return Err(PngEncodeErrors::TooLargeDimensions(
                "height", max_height, height
            ));
        }
        Ok(())
    }

    /// Return the zlib stream that goes into the IDAT chunk
    ///
    /// # Errors
    /// Same as [`encode`](Self::encode) minus I/O errors
    pub fn encode_pixel_data(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        self.check_dimensions()?;

        let raster = build_solid_raster(self.options.width(), self.options.height(), self.color)?;

        trace!("Raw raster is {} bytes", raster.len());

        Ok(DeflateEncoder::new(&raster).encode_zlib())
    }

    /// Encode the image into `sink` returning the number of bytes written
    ///
    /// # Errors
    /// - Zero width or height, or dimensions above the configured limits.
    ///   These are reported before anything is written to `sink`
    /// - Pixel data too large for a single `IDAT` chunk, also reported
    ///   before writing
    /// - Errors from the sink itself
    pub fn encode<T: Write>(&self, sink: T) -> Result<usize, PngEncodeErrors> {
        // validate and build everything first so bad input never
        // leaves half an image in the sink
        let pixel_data = self.encode_pixel_data()?;
        chunk_length(pixel_data.len())?;

        debug!(
            "Encoding {}x{} png filled with {}",
            self.options.width(),
            self.options.height(),
            self.color
        );
        let mut writer = ByteWriter::new(sink);

        // write signature
        writer.write_u64_be(PNG_SIGNATURE)?;
        write_header_fn(self, &mut writer, b"IHDR", write_ihdr)?;
        write_chunk(b"IDAT", &pixel_data, &mut writer)?;
        write_header_fn(self, &mut writer, b"IEND", write_iend)?;

        writer.flush()?;

        Ok(writer.bytes_written())
    }

    /// Encode the image into a new vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        let mut output = Vec::new();
        self.encode(&mut output)?;
        Ok(output)
    }
}

/// Create a `width` x `height` png where every pixel is `color`
///
/// The only size limit is the png one of 2^31-1 per side, the defaults
/// of [`EncoderOptions`] do not apply here.
///
/// # Example
/// ```
/// use swatch_core::color::Rgb;
/// use swatch_png::create_solid_image;
///
/// let png = create_solid_image(29, 29, Rgb::DARK_GRAY).unwrap();
/// assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
/// ```
pub fn create_solid_image(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>, PngEncodeErrors> {
    let options = EncoderOptions::new(width as usize, height as usize)
        .set_max_width(PNG_MAX_DIMENSION)
        .set_max_height(PNG_MAX_DIMENSION);

    SolidPngEncoder::new(color, options).encode_to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::calc_crc;

    #[test]
    fn test_exact_bytes_1x1() {
        let png = create_solid_image(1, 1, Rgb::new(0xFF, 0x00, 0x80)).unwrap();

        let raster = [0, 0xFF, 0x00, 0x80];
        let idat = DeflateEncoder::new(&raster).encode_zlib();

        let mut expected = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        // IHDR
        expected.extend_from_slice(&13_u32.to_be_bytes());
        let ihdr = [b'I', b'H', b'D', b'R', 0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
        expected.extend_from_slice(&ihdr);
        expected.extend_from_slice(&calc_crc(&ihdr).to_be_bytes());
        // IDAT
        expected.extend_from_slice(&(idat.len() as u32).to_be_bytes());
        let mut typed = b"IDAT".to_vec();
        typed.extend_from_slice(&idat);
        expected.extend_from_slice(&typed);
        expected.extend_from_slice(&calc_crc(&typed).to_be_bytes());
        // IEND
        expected.extend_from_slice(&[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);

        assert_eq!(png, expected);
    }

    #[test]
    fn test_idempotent() {
        let a = create_solid_image(29, 29, Rgb::DARK_GRAY).unwrap();
        let b = create_solid_image(29, 29, Rgb::DARK_GRAY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_limits_checked_before_writing() {
        let options = EncoderOptions::new(100, 10).set_max_width(64);
        let encoder = SolidPngEncoder::new(Rgb::BLACK, options);

        let mut sink = vec![];
        let err = encoder.encode(&mut sink).unwrap_err();

        assert!(matches!(err, PngEncodeErrors::TooLargeDimensions("width", 64, 100)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            create_solid_image(0, 29, Rgb::BLACK),
            Err(PngEncodeErrors::ZeroDimensions(0, 29))
        ));
    }

    #[test]
    fn test_wide_image_ignores_default_limits() {
        let png = create_solid_image(20000, 1, Rgb::BLACK).unwrap();
        let info = crate::chunks::read_png_info(&png).unwrap();

        assert_eq!((info.width, info.height), (20000, 1));
        assert_eq!(info.inflate_stored().unwrap().len(), 60001);
    }

    #[test]
    fn test_bytes_written_matches_output() {
        let encoder = SolidPngEncoder::new(Rgb::BLACK, EncoderOptions::new(58, 58));
        let mut sink = vec![];
        let written = encoder.encode(&mut sink).unwrap();
        assert_eq!(written, sink.len());
    }
}
