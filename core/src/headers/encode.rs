//! headers/encode.rs
//!
//! Serializes `DatabaseHeader` into one zero-padded block.

use crate::headers::types::DatabaseHeader;
use crate::types::{ParseError, Result};
use crate::utils::{put_bytes, put_u32, put_u64};

/// Encode the header as a full block of `h.block_size` bytes.
pub fn encode_header_le(h: &DatabaseHeader) -> Result<Vec<u8>> {
    let block = h.block_size as usize;
    if block < DatabaseHeader::LEN {
        return Err(ParseError::InvalidConfig(format!(
            "block_size {:#x} cannot hold the database header",
            h.block_size
        )));
    }

    let mut out = vec![0u8; block];
    let mut i = 0usize;

    put_bytes(&mut out, &mut i, &h.magic);       // 0..8   magic
    put_u32(&mut out, &mut i, h.version);        // 8..12  version
    put_u32(&mut out, &mut i, h.block_size);     // 12..16 block size
    put_u32(&mut out, &mut i, h.reserved[0]);    // 16..20 reserved
    put_u32(&mut out, &mut i, h.reserved[1]);    // 20..24 reserved
    put_u64(&mut out, &mut i, h.data_size);      // 24..32 data size

    debug_assert_eq!(i, DatabaseHeader::LEN, "encoding wrote incorrect length");

    Ok(out)
}
