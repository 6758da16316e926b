/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The reader wraps anything that can be viewed as a byte slice
//! and provides endian aware reads that either return an error
//! or a default value when the stream runs out of bytes.
pub use reader::{ByteIoError, ByteReader};

mod reader;
