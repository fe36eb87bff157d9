//! Sequential little-endian reader over an in-memory byte source.
//!
//! Design notes:
//! - Offsets only move forward; there is no seek.
//! - Every read past the end yields `ParseError::TruncatedInput` carrying the
//!   offset where the read started.
//! - Structural readers call `skip_to_block_boundary` after their fixed fields
//!   so each unit consumes exactly one block.

use byteorder::{ByteOrder, LittleEndian};

use crate::types::{ParseError, Result};

#[derive(Debug, Clone)]
pub struct BinaryCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> BinaryCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current absolute offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current absolute offset as a wire-width value (used in errors).
    #[inline]
    pub fn position(&self) -> u64 {
        self.offset as u64
    }

    /// Total length of the underlying source.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ParseError::TruncatedInput {
                offset: self.position(),
                needed: n,
                available: self.remaining(),
            });
        }
        let out = &self.buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut dst = [0u8; N];
        dst.copy_from_slice(self.read_bytes(N)?);
        Ok(dst)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Advance to the next multiple of `block_size`. No-op when already aligned.
    ///
    /// The skipped bytes must exist; a source that ends inside the block is truncated.
    pub fn skip_to_block_boundary(&mut self, block_size: usize) -> Result<()> {
        if block_size == 0 {
            return Err(ParseError::InvalidConfig("block size must be non-zero".into()));
        }
        let rem = self.offset % block_size;
        if rem == 0 {
            return Ok(());
        }
        self.read_bytes(block_size - rem).map(|_| ())
    }

    #[inline]
    pub fn is_block_aligned(&self, block_size: usize) -> bool {
        block_size != 0 && self.offset % block_size == 0
    }
}
