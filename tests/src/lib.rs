/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod inflate;
mod png;

/// One image whose exact encoding was recorded independently
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:   String,
    pub width:  u32,
    pub height: u32,
    pub color:  String,
    /// Length of the whole png
    pub size:   usize,
    /// CRC-32 of the whole png
    pub crc:    u32
}

pub fn load_entries(file: &str) -> Vec<TestEntry> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(file);

    let json_file = read(path).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Hash with flate2's crc so the check doesn't lean on our own tables
fn hash(contents: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(contents);
    crc.sum()
}
