/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when reading from a [`ByteReader`]
pub enum ByteIoError {
    /// Not enough bytes left in the stream
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes left
    NotEnoughBytes(usize, usize),
    /// A seek would move the cursor outside of the stream
    SeekError(&'static str),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A cursor over an in-memory buffer
///
/// Reads advance the position, failed reads leave it untouched.
pub struct ByteReader<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteReader<T> {
    /// Create a new reader positioned at the start of `stream`
    pub fn new(stream: T) -> ByteReader<T> {
        ByteReader {
            stream,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    #[inline(always)]
    pub fn consume(self) -> T {
        self.stream
    }
    /// Total length of the underlying stream
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stream.as_ref().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Current position of the cursor
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }
    /// Number of bytes between the cursor and the end of the stream
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    #[inline(always)]
    pub fn eof(&self) -> bool {
        self.position >= self.len()
    }

    /// Move the cursor `num` bytes forward
    ///
    /// Landing exactly on the end of the stream is allowed,
    /// going past it is an error.
    #[inline]
    pub fn skip(&mut self, num: usize) -> Result<(), ByteIoError> {
        match self.position.checked_add(num) {
            Some(end) if end <= self.len() => {
                self.position = end;
                Ok(())
            }
            _ => Err(ByteIoError::SeekError("Skip past the end of the stream"))
        }
    }
    /// Move the cursor `num` bytes backwards
    #[inline]
    pub fn rewind(&mut self, num: usize) -> Result<(), ByteIoError> {
        match self.position.checked_sub(num) {
            Some(start) => {
                self.position = start;
                Ok(())
            }
            None => Err(ByteIoError::SeekError("Rewind before the start of the stream"))
        }
    }
    /// Set the cursor to an absolute position
    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        if position > self.len() {
            return Err(ByteIoError::SeekError("Position is past the end of the stream"));
        }
        self.position = position;
        Ok(())
    }

    /// Borrow `num` bytes starting at the cursor without advancing it
    #[inline]
    pub fn peek_at(&self, num: usize) -> Result<&[u8], ByteIoError> {
        let end = self
            .position
            .checked_add(num)
            .ok_or(ByteIoError::Generic("Peek length overflowed"))?;

        self.stream
            .as_ref()
            .get(self.position..end)
            .ok_or(ByteIoError::NotEnoughBytes(num, self.remaining()))
    }

    /// Fill `buf` with bytes from the stream or return an error if
    /// there are not enough bytes left
    #[inline]
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let bytes = self.peek_at(buf.len())?;
        buf.copy_from_slice(bytes);
        self.position += buf.len();
        Ok(())
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_exact_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        self.read_fixed_bytes_or_error::<N>().unwrap_or([0; N])
    }

    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        self.read_fixed_bytes_or_zero::<1>()[0]
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        Ok(self.read_fixed_bytes_or_error::<1>()?[0])
    }
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$int_type:tt) => {
        impl<T: AsRef<[u8]>> ByteReader<T>
        {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> $int_type
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_zero::<SIZE_OF_VAL>();

                match mode {
                    Mode::BE => $int_type::from_be_bytes(space),
                    Mode::LE => $int_type::from_le_bytes(space)
                }
            }

            #[inline(always)]
            fn $name2(&mut self, mode: Mode) -> Result<$int_type, ByteIoError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                match mode {
                    Mode::BE => Ok($int_type::from_be_bytes(space)),
                    Mode::LE => Ok($int_type::from_le_bytes(space))
                }
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ByteIoError>
            {
                self.$name2(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name4(&mut self) -> Result<$int_type, ByteIoError>
            {
                self.$name2(Mode::LE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning 0 if the underlying  buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name5(&mut self) -> $int_type
            {
                self.$name(Mode::BE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name6(&mut self) -> $int_type
            {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(
    get_u16_inner_or_default,
    get_u16_inner_or_die,
    get_u16_be_err,
    get_u16_le_err,
    get_u16_be,
    get_u16_le,
    u16
);
get_single_type!(
    get_u32_inner_or_default,
    get_u32_inner_or_die,
    get_u32_be_err,
    get_u32_le_err,
    get_u32_be,
    get_u32_le,
    u32
);
get_single_type!(
    get_i32_inner_or_default,
    get_i32_inner_or_die,
    get_i32_be_err,
    get_i32_le_err,
    get_i32_be,
    get_i32_le,
    i32
);
