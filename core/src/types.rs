use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::headers::UnicvVersion;
use crate::utils::{enum_name_or_hex, fmt_bytes};

pub type Result<T> = std::result::Result<T, ParseError>;

/// Unified parse error.
/// - Structural variants carry the absolute byte offset of the offending field.
/// - Any variant aborts the whole parse; no partial database is ever returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Wrong magic word at a header or table-entry boundary.
    #[error("magic mismatch at offset {offset:#x}: expected {}, got {}", fmt_bytes(.expected), fmt_bytes(.actual))]
    MagicMismatch {
        offset: u64,
        expected: [u8; 8],
        actual: [u8; 8],
    },

    /// Version outside the recognised set.
    #[error("unsupported version at offset {offset:#x}: {} (supported: {supported:?})", version_name(.actual))]
    UnsupportedVersion {
        offset: u64,
        supported: Vec<u32>,
        actual: u32,
    },

    /// blockSize / pageSize / signatureSize / fileChunkSize / capacity deviates from the format.
    #[error("{field} mismatch at offset {offset:#x}: expected {expected:#x}, got {actual:#x}")]
    SizeMismatch {
        offset: u64,
        field: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Signature counts inconsistent with the remaining or total chunk count.
    #[error("{field} mismatch at offset {offset:#x}: expected {expected}, got {actual}")]
    CountMismatch {
        offset: u64,
        field: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Padding that must be zero is not.
    #[error("{field} at offset {offset:#x} must be zero, got {actual:#x}")]
    ReservedNonZero {
        offset: u64,
        field: &'static str,
        actual: u64,
    },

    /// Fewer bytes available than a read requires.
    #[error("truncated input at offset {offset:#x}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Input (or its declared data size) is larger than the caller allows.
    #[error("{what} of {actual} bytes exceeds limit of {limit} bytes")]
    LimitExceeded {
        what: &'static str,
        limit: u64,
        actual: u64,
    },

    /// The format configuration table is not self-consistent.
    #[error("invalid format configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn version_name(raw: &u32) -> String {
    enum_name_or_hex::<UnicvVersion>(*raw)
}

impl ParseError {
    /// Byte offset of the violated constraint, when the error is structural.
    pub fn offset(&self) -> Option<u64> {
        use ParseError::*;
        match self {
            MagicMismatch { offset, .. }
            | UnsupportedVersion { offset, .. }
            | SizeMismatch { offset, .. }
            | CountMismatch { offset, .. }
            | ReservedNonZero { offset, .. }
            | TruncatedInput { offset, .. } => Some(*offset),
            LimitExceeded { .. } | InvalidConfig(_) | Io { .. } => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
