/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `\x89PNG\r\n\x1a\n` read as a big endian u64
pub const PNG_SIGNATURE: u64 = 0x89504E47_0D0A1A0A;

/// Size of the IHDR payload
pub const PNG_IHDR_SIZE: usize = 13;

/// Bits per sample, the only depth written
pub const PNG_BIT_DEPTH: u8 = 8;

/// Compression method 0, deflate with a 32K window
pub const PNG_COMPRESSION_DEFLATE: u8 = 0;

/// Filter method 0, adaptive filtering with five filter types
pub const PNG_FILTER_METHOD_ADAPTIVE: u8 = 0;

/// Interlace method 0, no interlacing
pub const PNG_INTERLACE_NONE: u8 = 0;

/// Longest payload a single chunk may carry, 2^31-1 bytes
pub const PNG_MAX_CHUNK_LENGTH: usize = (1 << 31) - 1;
