/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the cereal crates
//!
//! This crate provides the small set of routines shared by
//! the bitmap decoder and the glyph recognizer.
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads over an in-memory buffer
//! - Decoder options shared by anything that turns bytes into a bitmap
//! - Logging macros that compile to nothing unless the `log` feature is on
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`.
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for the error types.
//!
//!  - `log`: Forwards the logging macros to the [`log`](https://docs.rs/log) crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod options;
