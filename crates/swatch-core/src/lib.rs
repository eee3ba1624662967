/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides the small set of types shared
//! by the encoders under the `swatch` umbrella
//!
//! It currently contains
//!
//! - An RGB triple and a hex color parser with caller chosen fallbacks
//! - Encoder options (image geometry and limits)
//! - A byte writer with endian aware writes over any [`std::io::Write`] sink
//!
pub mod bytestream;
pub mod color;
pub mod options;
