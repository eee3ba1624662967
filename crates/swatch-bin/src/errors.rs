/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use swatch_png::error::{PngChunkErrors, PngEncodeErrors};

/// Everything that can stop a command
pub enum BinErrors {
    EncodeErrors(PngEncodeErrors),
    ChunkErrors(PngChunkErrors),
    IoErrors(std::io::Error),
    LoggerErrors(log::SetLoggerError),
    JsonErrors(serde_json::Error),
    GenericString(String)
}

impl Debug for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EncodeErrors(err) => writeln!(f, "Encoding failed: {err:?}"),
            Self::ChunkErrors(err) => writeln!(f, "Invalid png: {err:?}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::LoggerErrors(err) => writeln!(f, "Could not set up logger: {err}"),
            Self::JsonErrors(err) => writeln!(f, "Could not serialize report: {err}"),
            Self::GenericString(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BinErrors {}

impl From<PngEncodeErrors> for BinErrors {
    fn from(value: PngEncodeErrors) -> Self {
        BinErrors::EncodeErrors(value)
    }
}

impl From<PngChunkErrors> for BinErrors {
    fn from(value: PngChunkErrors) -> Self {
        BinErrors::ChunkErrors(value)
    }
}

impl From<std::io::Error> for BinErrors {
    fn from(value: std::io::Error) -> Self {
        BinErrors::IoErrors(value)
    }
}

impl From<log::SetLoggerError> for BinErrors {
    fn from(value: log::SetLoggerError) -> Self {
        BinErrors::LoggerErrors(value)
    }
}

impl From<serde_json::Error> for BinErrors {
    fn from(value: serde_json::Error) -> Self {
        BinErrors::JsonErrors(value)
    }
}
