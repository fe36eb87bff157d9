//! Format configuration table and per-call parse options.
//!
//! `FormatConfig` collects every constant the parser compares against, so a
//! new format revision is a new table rather than scattered literals.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DB_MAGIC, DEFAULT_MAX_INPUT_LEN, DIGEST_LEN, EXPECTED_BLOCK_SIZE, FILE_CHUNK_SIZE,
    MAX_SIGNATURES_PER_PAGE, RESERVED_MARKER, SIGNATURE_SIZE, SUPPORTED_VERSIONS, TABLE_MAGIC,
};
use crate::headers::DatabaseHeader;
use crate::signatures::SignaturePage;
use crate::table::FileTableEntry;
use crate::types::{ParseError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub db_magic: [u8; 8],
    pub table_magic: [u8; 8],
    pub supported_versions: Vec<u32>,
    pub block_size: u32,
    pub max_signatures_per_page: u32,
    pub signature_size: u32,
    pub file_chunk_size: u32,
    pub reserved_marker: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            db_magic: DB_MAGIC,
            table_magic: TABLE_MAGIC,
            supported_versions: SUPPORTED_VERSIONS.to_vec(),
            block_size: EXPECTED_BLOCK_SIZE,
            max_signatures_per_page: MAX_SIGNATURES_PER_PAGE,
            signature_size: SIGNATURE_SIZE,
            file_chunk_size: FILE_CHUNK_SIZE,
            reserved_marker: RESERVED_MARKER,
        }
    }
}

impl FormatConfig {
    /// Load a table from JSON. Missing fields fall back to the defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ParseError::InvalidConfig(format!("json: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the table is self-consistent. Run once before parsing.
    pub fn validate(&self) -> Result<()> {
        if self.supported_versions.is_empty() {
            return Err(ParseError::InvalidConfig("no supported versions".into()));
        }
        if self.signature_size as usize != DIGEST_LEN {
            return Err(ParseError::InvalidConfig(format!(
                "signature_size {} does not match digest width {}",
                self.signature_size, DIGEST_LEN
            )));
        }
        if self.max_signatures_per_page == 0 {
            return Err(ParseError::InvalidConfig("max_signatures_per_page is zero".into()));
        }
        let block = self.block_size as usize;
        let largest_fixed = DatabaseHeader::LEN.max(FileTableEntry::LEN);
        if block < largest_fixed {
            return Err(ParseError::InvalidConfig(format!(
                "block_size {:#x} cannot hold a {} byte header",
                self.block_size, largest_fixed
            )));
        }
        let full_page = self.full_page_len();
        if full_page > block {
            return Err(ParseError::InvalidConfig(format!(
                "a full signature page ({} bytes) exceeds block_size {:#x}",
                full_page, self.block_size
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn supports_version(&self, v: u32) -> bool {
        self.supported_versions.contains(&v)
    }

    /// Bytes occupied by a page holding `max_signatures_per_page` digests.
    /// This is the canonical on-disk `binTreeSize` (0x3f8 for the default table).
    #[inline]
    pub fn full_page_len(&self) -> usize {
        SignaturePage::HEADER_LEN + self.max_signatures_per_page as usize * self.signature_size as usize
    }
}

/// Options for a single parse call.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub format: FormatConfig,
    /// Entry count taken from the companion file catalog.
    /// When `None`, entries are read until `blockSize + dataSize`.
    pub expected_entries: Option<usize>,
    /// Refuse inputs (or declared data sizes) larger than this.
    pub max_input_len: u64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            format: FormatConfig::default(),
            expected_entries: None,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParseOptions {
    pub fn with_expected_entries(mut self, n: usize) -> Self {
        self.expected_entries = Some(n);
        self
    }

    pub fn with_max_input_len(mut self, limit: u64) -> Self {
        self.max_input_len = limit;
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}
