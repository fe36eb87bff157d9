//! table/encode.rs

use crate::table::types::FileTableEntry;
use crate::types::{ParseError, Result};
use crate::utils::{put_bytes, put_u32};

/// Encode an entry as one zero-padded block of `page_size` bytes. Padding is written as zero.
pub fn encode_table_entry_le(e: &FileTableEntry) -> Result<Vec<u8>> {
    let block = e.page_size as usize;
    if block < FileTableEntry::LEN {
        return Err(ParseError::InvalidConfig(format!(
            "page_size {:#x} cannot hold a file table entry",
            e.page_size
        )));
    }

    let mut out = vec![0u8; block];
    let mut i = 0usize;

    put_bytes(&mut out, &mut i, &e.magic);                  // 0..8   magic
    put_u32(&mut out, &mut i, e.version);                   // 8..12  version
    put_u32(&mut out, &mut i, e.page_size);                 // 12..16 page size
    put_u32(&mut out, &mut i, e.max_signatures_per_page);   // 16..20 page capacity
    put_u32(&mut out, &mut i, e.total_chunk_count);         // 20..24 chunk count
    put_u32(&mut out, &mut i, e.file_chunk_size);           // 24..28 file chunk size
    put_u32(&mut out, &mut i, 0);                           // 28..32 padding
    put_bytes(&mut out, &mut i, &e.aux_data);               // 32..52 aux data
    put_bytes(&mut out, &mut i, &e.base_key);               // 52..72 base key

    debug_assert_eq!(i, FileTableEntry::LEN, "encoding wrote incorrect length");

    Ok(out)
}
