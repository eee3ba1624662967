use std::io::prelude::*;
use std::io::Cursor;

use nanorand::{Rng, WyRand};
use swatch_deflate::{calc_adler_hash, decode_zlib_stored, DeflateEncoder};

fn decode_writer_flate(bytes: &[u8]) -> Vec<u8> {
    let mut writer = Vec::new();

    let mut deflater = flate2::read::ZlibDecoder::new(Cursor::new(bytes));

    deflater.read_to_end(&mut writer).unwrap();

    writer
}

fn decode_raw_flate(bytes: &[u8]) -> Vec<u8> {
    let mut writer = Vec::new();

    let mut deflater = flate2::read::DeflateDecoder::new(Cursor::new(bytes));

    deflater.read_to_end(&mut writer).unwrap();

    writer
}

fn random_bytes(rng: &mut WyRand, len: usize) -> Vec<u8> {
    let mut data = vec![0_u8; len];
    rng.fill_bytes(&mut data);
    data
}

#[test]
fn test_flate_accepts_stored_streams() {
    let mut rng = WyRand::new_seed(0x5EED);

    // around the stored block boundaries
    for len in [0, 1, 2, 1000, 65534, 65535, 65536, 65537, 131070, 131071, 200_000] {
        let data = random_bytes(&mut rng, len);
        let stream = DeflateEncoder::new(&data).encode_zlib();

        let flate_data = decode_writer_flate(&stream);
        assert_eq!(flate_data.len(), data.len(), "length mismatch for {len}");
        assert!(flate_data == data, "content mismatch for {len}");

        // and our own reader agrees
        assert!(decode_zlib_stored(&stream).unwrap() == data);
    }
}

#[test]
fn test_flate_accepts_raw_deflate() {
    let mut rng = WyRand::new_seed(42);
    let data = random_bytes(&mut rng, 70_000);

    let deflate = DeflateEncoder::new(&data).encode_deflate();
    assert!(decode_raw_flate(&deflate) == data);
}

#[test]
fn test_adler_matches_simd_adler() {
    let mut rng = WyRand::new_seed(7);

    for len in [0, 1, 5551, 5552, 5553, 65536, 1 << 20] {
        let data = random_bytes(&mut rng, len);
        assert_eq!(
            calc_adler_hash(&data),
            simd_adler32::adler32(&data.as_slice()),
            "adler mismatch for {len}"
        );
    }
}
