//! database/encode.rs
//!
//! Serializes a `Database` back to the block layout: header block, then each
//! entry block followed by its signature pages.

use crate::database::types::Database;
use crate::headers::encode_header_le;
use crate::signatures::encode_signature_chain_le;
use crate::table::encode_table_entry_le;
use crate::types::Result;

pub fn encode_database(db: &Database) -> Result<Vec<u8>> {
    let block = db.header.block_size;
    let blocks = 1 + db.entries.iter().map(|e| e.block_count()).sum::<usize>();
    let mut out = Vec::with_capacity(blocks * block as usize);

    out.extend_from_slice(&encode_header_le(&db.header)?);
    for entry in &db.entries {
        out.extend_from_slice(&encode_table_entry_le(entry.table())?);
        if let Some(chain) = entry.chain() {
            out.extend_from_slice(&encode_signature_chain_le(chain, block)?);
        }
    }

    Ok(out)
}

impl Database {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_database(self)
    }
}
