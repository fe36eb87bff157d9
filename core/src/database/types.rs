//! database/types.rs
//! The assembled in-memory tree.

use serde::Serialize;

use crate::config::FormatConfig;
use crate::headers::DatabaseHeader;
use crate::signatures::SignatureChain;
use crate::table::{EntryKind, FileTableEntry};
use crate::types::{ParseError, Result};

/// One file-table entry with its chain when it is a file.
/// `page` is the absolute block index of the entry's table block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DbEntry {
    Directory {
        page: u64,
        table: FileTableEntry,
    },
    File {
        page: u64,
        table: FileTableEntry,
        chain: SignatureChain,
    },
}

impl DbEntry {
    /// Unplaced directory entry; `Database::from_entries` assigns the page.
    pub fn directory(table: FileTableEntry) -> Self {
        Self::Directory { page: 0, table }
    }

    /// Unplaced file entry; `Database::from_entries` assigns the page.
    pub fn file(table: FileTableEntry, chain: SignatureChain) -> Self {
        Self::File {
            page: 0,
            table,
            chain,
        }
    }

    pub fn table(&self) -> &FileTableEntry {
        match self {
            Self::Directory { table, .. } | Self::File { table, .. } => table,
        }
    }

    pub fn page(&self) -> u64 {
        match self {
            Self::Directory { page, .. } | Self::File { page, .. } => *page,
        }
    }

    pub fn chain(&self) -> Option<&SignatureChain> {
        match self {
            Self::Directory { .. } => None,
            Self::File { chain, .. } => Some(chain),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Directory { .. } => EntryKind::Directory,
            Self::File { .. } => EntryKind::File,
        }
    }

    /// Blocks this entry occupies on disk: its table block plus any pages.
    pub fn block_count(&self) -> usize {
        1 + self.chain().map_or(0, SignatureChain::page_count)
    }

    fn set_page(&mut self, p: u64) {
        match self {
            Self::Directory { page, .. } | Self::File { page, .. } => *page = p,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub header: DatabaseHeader,
    pub entries: Vec<DbEntry>,
}

impl Database {
    /// Build a database around `entries`, assigning page indices and `data_size`.
    pub fn from_entries(version: u32, mut entries: Vec<DbEntry>, cfg: &FormatConfig) -> Self {
        let mut page = 1u64;
        for e in entries.iter_mut() {
            e.set_page(page);
            page += e.block_count() as u64;
        }
        let data_blocks = page - 1;

        let mut header = DatabaseHeader::new(version, data_blocks * cfg.block_size as u64);
        header.magic = cfg.db_magic;
        header.block_size = cfg.block_size;
        header.reserved = [cfg.reserved_marker; 2];

        Self { header, entries }
    }

    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind() == EntryKind::Directory).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind() == EntryKind::File).count()
    }

    pub fn files(&self) -> impl Iterator<Item = (&FileTableEntry, &SignatureChain)> + '_ {
        self.entries.iter().filter_map(|e| match e {
            DbEntry::File { table, chain, .. } => Some((table, chain)),
            DbEntry::Directory { .. } => None,
        })
    }

    /// Compare entry kinds against the companion catalog's directory and file counts.
    pub fn check_catalog_counts(&self, directories: usize, files: usize) -> Result<()> {
        let first_entry = self.header.block_size as u64;
        if self.directory_count() != directories {
            return Err(ParseError::CountMismatch {
                offset: first_entry,
                field: "directory entries",
                expected: directories as u64,
                actual: self.directory_count() as u64,
            });
        }
        if self.file_count() != files {
            return Err(ParseError::CountMismatch {
                offset: first_entry,
                field: "file entries",
                expected: files as u64,
                actual: self.file_count() as u64,
            });
        }
        Ok(())
    }
}
