/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! CRC-32 as used by png chunks
//!
//! Reflected polynomial `0xEDB88320`, the table is built at compile time.

const CRC_POLYNOMIAL: u32 = 0xEDB8_8320;

static CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0_u32; 256];
    let mut n = 0;

    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;

        while k < 8 {
            if c & 1 == 1 {
                c = CRC_POLYNOMIAL ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Update a running crc with `bytes`
///
/// Start with `u32::MAX` and invert the final result, this allows
/// computing the crc of data split across multiple buffers,
/// e.g a chunk name and its payload
#[inline]
pub fn calc_crc_with_bytes(bytes: &[u8], mut crc: u32) -> u32 {
    for byte in bytes {
        crc = CRC_TABLE[((crc ^ u32::from(*byte)) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc
}

/// Calculate the CRC-32 of `bytes`
///
/// ```
/// use swatch_png::crc::calc_crc;
/// assert_eq!(calc_crc(b"IEND"), 0xAE42_6082);
/// ```
pub fn calc_crc(bytes: &[u8]) -> u32 {
    !calc_crc_with_bytes(bytes, u32::MAX)
}

#[test]
fn test_known_values() {
    assert_eq!(calc_crc(&[]), 0);
    assert_eq!(calc_crc(b"123456789"), 0xCBF4_3926);
    assert_eq!(CRC_TABLE[1], 0x7707_3096);
    assert_eq!(CRC_TABLE[255], 0x2D02_EF8D);
}

#[test]
fn test_split_crc() {
    let whole = calc_crc(b"IDATsome payload");
    let split = !calc_crc_with_bytes(b"some payload", calc_crc_with_bytes(b"IDAT", u32::MAX));
    assert_eq!(whole, split);
}
