//! database/assemble.rs
//!
//! Drives header, table and chain readers over the whole input.
//!
//! Design notes:
//! - The table sequence does not self-terminate. It is bounded either by an
//!   expected entry count from the companion catalog or by `blockSize + dataSize`.
//! - Entries are read strictly in file order; each starts where the previous left off.
//! - Under the `dataSize` bound the last entry must end exactly at `blockSize + dataSize`.
//! - All-or-nothing: any error aborts and nothing partial escapes.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::ParseOptions;
use crate::cursor::BinaryCursor;
use crate::database::types::{Database, DbEntry};
use crate::headers::read_database_header;
use crate::signatures::read_signature_chain;
use crate::table::{read_table_entry, EntryKind};
use crate::types::{ParseError, Result};

/// Parse the database at `path`, bounded by its declared data size.
pub fn parse(path: impl AsRef<Path>) -> Result<Database> {
    parse_with(path, &ParseOptions::default())
}

pub fn parse_with(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<Database> {
    let path = path.as_ref();

    let meta = fs::metadata(path).map_err(|e| ParseError::io(path, e))?;
    if meta.len() > opts.max_input_len {
        return Err(ParseError::LimitExceeded {
            what: "input file",
            limit: opts.max_input_len,
            actual: meta.len(),
        });
    }

    let bytes = fs::read(path).map_err(|e| ParseError::io(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "read unicv database");

    parse_bytes(&bytes, opts)
}

pub fn parse_bytes(bytes: &[u8], opts: &ParseOptions) -> Result<Database> {
    opts.format.validate()?;
    if bytes.len() as u64 > opts.max_input_len {
        return Err(ParseError::LimitExceeded {
            what: "input",
            limit: opts.max_input_len,
            actual: bytes.len() as u64,
        });
    }
    DatabaseAssembler::new(bytes, opts).assemble()
}

pub struct DatabaseAssembler<'a> {
    cur: BinaryCursor<'a>,
    opts: &'a ParseOptions,
}

impl<'a> DatabaseAssembler<'a> {
    /// The format table in `opts` is assumed already validated.
    pub fn new(bytes: &'a [u8], opts: &'a ParseOptions) -> Self {
        Self {
            cur: BinaryCursor::new(bytes),
            opts,
        }
    }

    pub fn assemble(mut self) -> Result<Database> {
        let opts = self.opts;
        let header = read_database_header(&mut self.cur, &opts.format)?;

        let end = header.data_end();
        if opts.expected_entries.is_none() && end > opts.max_input_len {
            return Err(ParseError::LimitExceeded {
                what: "declared data size",
                limit: opts.max_input_len,
                actual: end,
            });
        }

        let block = header.block_size;
        let max_fit = self.cur.remaining() / block as usize;
        let mut entries = Vec::with_capacity(opts.expected_entries.unwrap_or(0).min(max_fit));

        loop {
            let done = match opts.expected_entries {
                Some(n) => entries.len() == n,
                None => self.cur.position() >= end,
            };
            if done {
                break;
            }
            entries.push(self.read_entry(block)?);
        }

        if opts.expected_entries.is_none() && self.cur.position() != end {
            return Err(ParseError::SizeMismatch {
                offset: self.cur.position(),
                field: "data_size (entries end past declared data)",
                expected: end,
                actual: self.cur.position(),
            });
        }

        debug!(entries = entries.len(), "assembled unicv database");

        Ok(Database { header, entries })
    }

    fn read_entry(&mut self, block: u32) -> Result<DbEntry> {
        let cfg = &self.opts.format;
        let page = self.cur.position() / block as u64;

        let table = read_table_entry(&mut self.cur, block, cfg)?;
        match table.kind() {
            EntryKind::Directory => Ok(DbEntry::Directory { page, table }),
            EntryKind::File => {
                let chain = read_signature_chain(&mut self.cur, &table, block, cfg)?;
                Ok(DbEntry::File { page, table, chain })
            }
        }
    }
}
