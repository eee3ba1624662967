/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder options
//!
//! Geometry and limits shared by the encoders. Colors are
//! always 8-bit RGB so there is nothing to configure there.

/// Largest width or height the PNG format can describe
pub const PNG_MAX_DIMENSION: usize = (1 << 31) - 1;

/// Options shared by the encoders in
/// the `swatch-` family of crates
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    max_width:  usize,
    max_height: usize
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:      0,
            height:     0,
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl EncoderOptions {
    /// Create options for a `width` by `height` image
    /// with default limits
    pub fn new(width: usize, height: usize) -> EncoderOptions {
        EncoderOptions::default()
            .set_width(width)
            .set_height(height)
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Maximum width the encoder accepts
    ///
    /// - Default value: 16384
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    /// Maximum height the encoder accepts
    ///
    /// - Default value: 16384
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set the maximum width, clamped to what PNG can store
    pub fn set_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.min(PNG_MAX_DIMENSION);
        self
    }
    /// Set the maximum height, clamped to what PNG can store
    pub fn set_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height.min(PNG_MAX_DIMENSION);
        self
    }
}

#[test]
fn test_limits_are_clamped() {
    let options = EncoderOptions::new(29, 29)
        .set_max_width(usize::MAX)
        .set_max_height(100);

    assert_eq!(options.width(), 29);
    assert_eq!(options.max_width(), PNG_MAX_DIMENSION);
    assert_eq!(options.max_height(), 100);
}
