/// Magic word of the root database header.
/// "SCEIRODB" = read-only database
// - Protocol magic fields are `[u8; 8]` so the type enforces the width and matches the struct field.
pub const DB_MAGIC: [u8; 8] = *b"SCEIRODB";

/// Magic word opening every file-table block.
pub const TABLE_MAGIC: [u8; 8] = *b"SCEIFTBL";

pub const UNICV_V1: u32 = 1;
pub const UNICV_V2: u32 = 2;
/// Versions accepted for both the root header and file-table entries.
pub const SUPPORTED_VERSIONS: &[u32] = &[UNICV_V1, UNICV_V2];

/// Size of every structural unit on disk (header, table entry, signature page).
pub const EXPECTED_BLOCK_SIZE: u32 = 0x400;

/// Maximum number of signatures a single signature page can hold.
pub const MAX_SIGNATURES_PER_PAGE: u32 = 0x32;

/// Width of one stored digest (HMAC-SHA1).
pub const SIGNATURE_SIZE: u32 = 0x14;
pub const DIGEST_LEN: usize = SIGNATURE_SIZE as usize;

/// Size of the real-file chunk covered by one digest.
pub const FILE_CHUNK_SIZE: u32 = 0x8000;

/// Value the two reserved header fields usually carry. Advisory only.
pub const RESERVED_MARKER: u32 = 0xFFFF_FFFF;

/// Default cap on input size (512 MiB).
pub const DEFAULT_MAX_INPUT_LEN: u64 = 512 * 1024 * 1024;

/// Fixed field lengths.
pub mod field_len {
    pub const MAGIC: usize = 8;
    pub const AUX_DATA: usize = 20;
    pub const BASE_KEY: usize = 20;
}
