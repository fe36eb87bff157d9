//! table/types.rs
//! File-table entry header and its directory/file classification.
//!
//! Layout notes:
//! - One block per entry; the first 72 bytes are meaningful.
//! - `total_chunk_count == 0` marks a directory. Anything else is a file whose
//!   signature pages follow immediately.
//! - `aux_data` and `base_key` are opaque here. The base key is consumed later
//!   for content key derivation.

use num_enum::TryFromPrimitive;
use serde::Serialize;

use crate::config::FormatConfig;
use crate::constants::{field_len, UNICV_V2};
use crate::headers::UnicvVersion;
use crate::signatures::page_count_for;
use crate::types::{ParseError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTableEntry {
    pub magic: [u8; 8],                          // "SCEIFTBL"
    pub version: u32,                            // 1 or 2
    pub page_size: u32,                          // == header block_size
    pub max_signatures_per_page: u32,            // page capacity, 0x32
    pub total_chunk_count: u32,                  // 0 => directory
    pub file_chunk_size: u32,                    // 0x8000 for files
    pub aux_data: [u8; field_len::AUX_DATA],     // zero for directories
    pub base_key: [u8; field_len::BASE_KEY],     // opaque key material
}

impl FileTableEntry {
    pub const LEN: usize = 8 // magic
        + 4                  // version
        + 4                  // page_size
        + 4                  // max_signatures_per_page
        + 4                  // total_chunk_count
        + 4                  // file_chunk_size
        + 4                  // padding
        + field_len::AUX_DATA
        + field_len::BASE_KEY;

    /// Offset of the padding word inside the block.
    pub(crate) const PADDING_OFFSET: u64 = 28;

    /// Directory entry with zeroed auxiliary fields.
    pub fn directory(cfg: &FormatConfig) -> Self {
        Self {
            magic: cfg.table_magic,
            version: UNICV_V2,
            page_size: cfg.block_size,
            max_signatures_per_page: cfg.max_signatures_per_page,
            total_chunk_count: 0,
            file_chunk_size: cfg.file_chunk_size,
            aux_data: [0u8; field_len::AUX_DATA],
            base_key: [0u8; field_len::BASE_KEY],
        }
    }

    /// File entry covering `total_chunk_count` chunks (must be non-zero to classify as a file).
    pub fn file(
        cfg: &FormatConfig,
        total_chunk_count: u32,
        aux_data: [u8; field_len::AUX_DATA],
        base_key: [u8; field_len::BASE_KEY],
    ) -> Self {
        Self {
            total_chunk_count,
            aux_data,
            base_key,
            ..Self::directory(cfg)
        }
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        if self.total_chunk_count == 0 {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    pub fn version_enum(&self) -> Option<UnicvVersion> {
        UnicvVersion::try_from_primitive(self.version).ok()
    }

    /// Number of signature pages following this entry.
    pub fn expected_page_count(&self) -> usize {
        page_count_for(self.total_chunk_count, self.max_signatures_per_page)
    }

    /// True when both auxiliary fields are all zero.
    pub fn aux_is_zero(&self) -> bool {
        self.aux_data.iter().all(|&b| b == 0) && self.base_key.iter().all(|&b| b == 0)
    }

    /// Validate structural fields against the configuration and the database block size.
    /// `base` is the absolute offset of the entry block.
    pub fn validate(&self, cfg: &FormatConfig, block_size: u32, base: u64) -> Result<()> {
        if self.magic != cfg.table_magic {
            return Err(ParseError::MagicMismatch {
                offset: base,
                expected: cfg.table_magic,
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

        if self.page_size != block_size {
            return Err(ParseError::SizeMismatch {
                offset: base + 12,
                field: "page_size",
                expected: block_size as u64,
                actual: self.page_size as u64,
            });
        }

        // Capacity drives the chain arithmetic, so it must match the table exactly.
        if self.max_signatures_per_page != cfg.max_signatures_per_page {
            return Err(ParseError::SizeMismatch {
                offset: base + 16,
                field: "max_signatures_per_page",
                expected: cfg.max_signatures_per_page as u64,
                actual: self.max_signatures_per_page as u64,
            });
        }

        if self.kind() == EntryKind::File && self.file_chunk_size != cfg.file_chunk_size {
            return Err(ParseError::SizeMismatch {
                offset: base + 24,
                field: "file_chunk_size",
                expected: cfg.file_chunk_size as u64,
                actual: self.file_chunk_size as u64,
            });
        }

        Ok(())
    }
}
