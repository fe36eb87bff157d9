//! unicv-core
//!
//! Parser for the read-only integrity database (`unicv.db`) that stores
//! per-chunk signatures for every file of a packaged title.
//! Verification, decryption and key derivation live elsewhere.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod cursor;
pub mod types;
pub mod utils;

// Layout layers, leaf first
pub mod headers;
pub mod table;
pub mod signatures;
pub mod database;

pub use database::{parse, parse_bytes, parse_with};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{FormatConfig, ParseOptions};
    pub use crate::database::{parse, parse_bytes, parse_with, Database, DbEntry};
    pub use crate::headers::{DatabaseHeader, UnicvVersion};
    pub use crate::signatures::{Digest, SignatureChain, SignaturePage};
    pub use crate::table::{EntryKind, FileTableEntry};
    pub use crate::types::{ParseError, Result};
}
