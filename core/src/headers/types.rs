//! headers/types.rs
//! Root database header and typed views.
//!
//! Layout notes:
//! - Occupies the first block of the file; only the first 32 bytes are meaningful.
//! - All multi-byte integers are little-endian.
//! - The two reserved words usually hold 0xFFFFFFFF. Their meaning is unconfirmed,
//!   so a different value is logged and tolerated.

use num_enum::TryFromPrimitive;
use serde::Serialize;

use crate::config::FormatConfig;
use crate::constants::{DB_MAGIC, EXPECTED_BLOCK_SIZE, RESERVED_MARKER, UNICV_V1, UNICV_V2};
use crate::types::{ParseError, Result};

/// Known format revisions.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum UnicvVersion {
    V1 = UNICV_V1,
    V2 = UNICV_V2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseHeader {
    pub magic: [u8; 8],     // "SCEIRODB"
    pub version: u32,       // 1 or 2
    pub block_size: u32,    // expected 0x400
    pub reserved: [u32; 2], // usually 0xFFFFFFFF
    pub data_size: u64,     // bytes following the header block
}

impl DatabaseHeader {
    pub const LEN: usize = 8 // magic
        + 4                  // version
        + 4                  // block_size
        + 4 + 4              // reserved
        + 8;                 // data_size

    pub fn new(version: u32, data_size: u64) -> Self {
        Self {
            magic: DB_MAGIC,
            version,
            block_size: EXPECTED_BLOCK_SIZE,
            reserved: [RESERVED_MARKER; 2],
            data_size,
        }
    }

    pub fn version_enum(&self) -> Option<UnicvVersion> {
        UnicvVersion::try_from_primitive(self.version).ok()
    }

    /// Absolute offset where the declared data ends.
    pub fn data_end(&self) -> u64 {
        (self.block_size as u64).saturating_add(self.data_size)
    }

    pub fn reserved_is_canonical(&self, cfg: &FormatConfig) -> bool {
        self.reserved.iter().all(|&r| r == cfg.reserved_marker)
    }

    /// Validate structural fields. `base` is the absolute offset of the header block.
    pub fn validate(&self, cfg: &FormatConfig, base: u64) -> Result<()> {
        if self.magic != cfg.db_magic {
            return Err(ParseError::MagicMismatch {
                offset: base,
                expected: cfg.db_magic,
                actual: self.magic,
            });
        }

        if !cfg.supports_version(self.version) {
            return Err(ParseError::UnsupportedVersion {
                offset: base + 8,
                supported: cfg.supported_versions.clone(),
                actual: self.version,
            });
        }

        if self.block_size != cfg.block_size {
            return Err(ParseError::SizeMismatch {
                offset: base + 12,
                field: "block_size",
                expected: cfg.block_size as u64,
                actual: self.block_size as u64,
            });
        }

        Ok(())
    }
}
