/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw scanlines for a single color image

use swatch_core::color::Rgb;

use crate::enums::{FilterMethod, PngColor};
use crate::error::PngEncodeErrors;

/// Size of one scanline including its leading filter byte
pub(crate) fn scanline_stride(width: usize) -> Result<usize, PngEncodeErrors> {
    width
        .checked_mul(PngColor::RGB.num_components())
        .and_then(|x| x.checked_add(1))
        .ok_or(PngEncodeErrors::Overflow("scanline size overflows usize"))
}

/// Build the unfiltered scanlines of a `width` x `height` image
/// where every pixel is `color`
///
/// Each row is a `0` filter byte followed by `width` RGB triples,
/// which is what the IDAT stream decompresses to.
///
/// # Errors
/// - A zero width or height
/// - A raster size that overflows `usize`
pub fn build_solid_raster(
    width: usize, height: usize, color: Rgb
) -> Result<Vec<u8>, PngEncodeErrors> {
    if width == 0 || height == 0 {
        return Err(PngEncodeErrors::ZeroDimensions(width, height));
    }
    let stride = scanline_stride(width)?;
    let size = stride
        .checked_mul(height)
        .ok_or(PngEncodeErrors::Overflow("raster size overflows usize"))?;

    let mut raster = vec![0_u8; size];
    let pixel = color.to_array();

    for scanline in raster.chunks_exact_mut(stride) {
        let (filter, pixels) = scanline.split_at_mut(1);

        filter[0] = FilterMethod::None.to_int();

        for px in pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&pixel);
        }
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let raster = build_solid_raster(2, 2, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(raster, [0, 1, 2, 3, 1, 2, 3, 0, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_size() {
        let raster = build_solid_raster(29, 3, Rgb::DARK_GRAY).unwrap();
        assert_eq!(raster.len(), 3 * (1 + 29 * 3));
        assert!(raster.chunks_exact(88).all(|row| row[0] == 0));
        assert!(raster.chunks_exact(88).all(|row| row[1..].iter().all(|x| *x == 51)));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            build_solid_raster(0, 10, Rgb::BLACK),
            Err(PngEncodeErrors::ZeroDimensions(0, 10))
        ));
        assert!(matches!(
            build_solid_raster(10, 0, Rgb::BLACK),
            Err(PngEncodeErrors::ZeroDimensions(10, 0))
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            build_solid_raster(usize::MAX, 1, Rgb::BLACK),
            Err(PngEncodeErrors::Overflow(_))
        ));
        assert!(matches!(
            build_solid_raster(usize::MAX / 8, 8, Rgb::BLACK),
            Err(PngEncodeErrors::Overflow(_))
        ));
    }
}
