/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Block type of a stored (uncompressed) deflate block
pub const DEFLATE_BLOCKTYPE_UNCOMPRESSED: u8 = 0b00;

/// Largest payload a single stored block can carry, LEN is a u16
pub const DEFLATE_MAX_STORED_BLOCK: usize = u16::MAX as usize;

/// zlib compression method for deflate
pub const ZLIB_CM_DEFLATE: u16 = 8;

/// zlib window size, log2(window) - 8, i.e 32K
pub const ZLIB_CINFO_32K_WINDOW: u16 = 7;

/// Bit in the zlib header set when a preset dictionary follows
pub const ZLIB_FDICT: u16 = 1 << 5;

/// Adler-32 modulus, the largest prime below 2^16
pub const ADLER_MODULO: u32 = 65521;
