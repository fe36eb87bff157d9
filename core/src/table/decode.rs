//! table/decode.rs
//!
//! Reads one `SCEIFTBL` block and classifies it.
//!
//! Design notes:
//! - The cursor must sit on a block boundary; it advances exactly one block.
//! - Directory entries with non-zero auxiliary bytes are logged, not rejected.

use tracing::{debug, warn};

use crate::config::FormatConfig;
use crate::cursor::BinaryCursor;
use crate::table::types::{EntryKind, FileTableEntry};
use crate::types::{ParseError, Result};

pub fn read_table_entry(
    cur: &mut BinaryCursor<'_>,
    block_size: u32,
    cfg: &FormatConfig,
) -> Result<FileTableEntry> {
    debug_assert!(cur.is_block_aligned(block_size as usize));
    let base = cur.position();

    let magic                   = cur.read_array::<8>()?;   // 0..8   magic
    let version                 = cur.read_u32_le()?;       // 8..12  version
    let page_size               = cur.read_u32_le()?;       // 12..16 page size
    let max_signatures_per_page = cur.read_u32_le()?;       // 16..20 page capacity
    let total_chunk_count       = cur.read_u32_le()?;       // 20..24 chunk count
    let file_chunk_size         = cur.read_u32_le()?;       // 24..28 file chunk size
    let padding                 = cur.read_u32_le()?;       // 28..32 padding
    let aux_data                = cur.read_array::<20>()?;  // 32..52 aux data
    let base_key                = cur.read_array::<20>()?;  // 52..72 base key

    let entry = FileTableEntry {
        magic,
        version,
        page_size,
        max_signatures_per_page,
        total_chunk_count,
        file_chunk_size,
        aux_data,
        base_key,
    };

    entry.validate(cfg, block_size, base)?;

    if padding != 0 {
        return Err(ParseError::ReservedNonZero {
            offset: base + FileTableEntry::PADDING_OFFSET,
            field: "table padding",
            actual: padding as u64,
        });
    }

    if entry.kind() == EntryKind::Directory && !entry.aux_is_zero() {
        warn!(offset = base, "directory entry carries non-zero aux data or base key");
    }

    cur.skip_to_block_boundary(block_size as usize)?;

    debug!(
        offset = base,
        kind = ?entry.kind(),
        chunks = entry.total_chunk_count,
        "parsed file table entry"
    );

    Ok(entry)
}
