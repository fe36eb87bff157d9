//! headers/decode.rs
//!
//! Reads the root header block.
//!
//! Design notes:
//! - Fields are decoded one by one through `BinaryCursor`; no struct overlay.
//! - Field order must match `encode.rs` exactly.
//! - The cursor advances exactly one block on success.

use tracing::{debug, warn};

use crate::config::FormatConfig;
use crate::cursor::BinaryCursor;
use crate::headers::types::DatabaseHeader;
use crate::types::Result;

/// Read and validate the header at the cursor (expected at offset 0).
pub fn read_database_header(cur: &mut BinaryCursor<'_>, cfg: &FormatConfig) -> Result<DatabaseHeader> {
    let base = cur.position();

    let h = DatabaseHeader {
        magic:      cur.read_array::<8>()?,                      // 0..8   magic
        version:    cur.read_u32_le()?,                          // 8..12  version
        block_size: cur.read_u32_le()?,                          // 12..16 block size
        reserved:   [cur.read_u32_le()?, cur.read_u32_le()?],    // 16..24 reserved
        data_size:  cur.read_u64_le()?,                          // 24..32 data size
    };

    h.validate(cfg, base)?;

    if !h.reserved_is_canonical(cfg) {
        warn!(
            offset = base + 16,
            reserved0 = %format!("{:#x}", h.reserved[0]),
            reserved1 = %format!("{:#x}", h.reserved[1]),
            "unexpected reserved header values"
        );
    }

    cur.skip_to_block_boundary(h.block_size as usize)?;

    debug!(
        version = h.version,
        block_size = h.block_size,
        data_size = h.data_size,
        "parsed database header"
    );

    Ok(h)
}
