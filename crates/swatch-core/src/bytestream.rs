/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A byte writer with big endian writes
//!
//! Wraps any [`Write`] sink and counts the bytes that
//! went through it.
use core::fmt::{Debug, Display, Formatter};
use std::io::Write;

/// Errors from writing to the underlying sink
pub enum ByteIoError {
    StdIoError(std::io::Error)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StdIoError(err) => writeln!(f, "Underlying I/O error {err}")
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// Encapsulates a simple byte writer with
/// support for big endian writes
pub struct ByteWriter<T: Write> {
    sink:          T,
    bytes_written: usize
}

impl<T: Write> ByteWriter<T> {
    /// Create a new writer for the stream
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            sink,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// # Example
    /// ```
    /// use swatch_core::bytestream::ByteWriter;
    /// let mut sink = vec![];
    /// let mut writer = ByteWriter::new(&mut sink);
    /// writer.write_u32_be(1).unwrap();
    /// assert_eq!(writer.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write all of `buf` to the sink
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.sink.write_all(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Flush the sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.sink.flush()?;
        Ok(())
    }
}

macro_rules! write_single_type {
    ($be_name:tt,$int_type:tt) => {
        impl<T: Write> ByteWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[inline]
            pub fn $be_name(&mut self, value: $int_type) -> Result<(), ByteIoError> {
                self.write_all(&value.to_be_bytes())
            }
        }
    };
}

write_single_type!(write_u64_be, u64);
write_single_type!(write_u32_be, u32);

#[test]
fn test_endian_writes() {
    let mut sink = vec![];
    let mut writer = ByteWriter::new(&mut sink);

    writer.write_u32_be(0xDEADBEEF).unwrap();
    writer.write_u64_be(0x0102).unwrap();
    writer.write_all(&[7]).unwrap();

    assert_eq!(writer.bytes_written(), 13);
    assert_eq!(sink, [0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 0, 0, 0, 1, 2, 7]);
}
