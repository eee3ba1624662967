/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Adler-32 checksum, the trailer of every zlib stream

use crate::constants::ADLER_MODULO;

/// Largest n such that 255n(n+1)/2 + (n+1)(MOD-1) fits in a u32,
/// so the modulo can be deferred for that many bytes.
const NMAX: usize = 5552;

/// Streaming Adler-32 state
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Adler32 {
    a: u32,
    b: u32
}

impl Default for Adler32 {
    fn default() -> Self {
        Adler32::new()
    }
}

impl Adler32 {
    pub const fn new() -> Adler32 {
        Adler32 { a: 1, b: 0 }
    }

    /// Feed more bytes into the checksum
    pub fn update(&mut self, data: &[u8]) {
        let (mut a, mut b) = (self.a, self.b);

        for chunk in data.chunks(NMAX) {
            for byte in chunk {
                a += u32::from(*byte);
                b += a;
            }
            a %= ADLER_MODULO;
            b %= ADLER_MODULO;
        }
        self.a = a;
        self.b = b;
    }

    /// Return the checksum of everything fed so far
    pub const fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

/// Calculate the Adler-32 hash of `data`
///
/// ```
/// use swatch_deflate::calc_adler_hash;
/// assert_eq!(calc_adler_hash(&[]), 1);
/// assert_eq!(calc_adler_hash(b"Wikipedia"), 0x11E6_0398);
/// ```
pub fn calc_adler_hash(data: &[u8]) -> u32 {
    let mut hasher = Adler32::new();
    hasher.update(data);
    hasher.finish()
}
