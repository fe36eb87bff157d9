//! signatures/types.rs
//! Signature pages and the per-file chain they form.
//!
//! Layout notes:
//! - A page is one block: a 16-byte header followed by `signature_count` digests.
//!   Bytes after the last digest are padding.
//! - A file with more chunks than one page holds spills into further pages.
//!   The page count is never stored; it falls out of the chunk count.

use serde::Serialize;

use crate::config::FormatConfig;
use crate::constants::DIGEST_LEN;

/// One stored chunk digest (HMAC-SHA1 width).
pub type Digest = [u8; DIGEST_LEN];

/// Pages needed to hold `total_chunks` digests at `capacity` per page.
///
/// An exact multiple of `capacity` ends on a full page, never an empty one.
#[inline]
pub fn page_count_for(total_chunks: u32, capacity: u32) -> usize {
    if capacity == 0 {
        return 0;
    }
    total_chunks.div_ceil(capacity) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignaturePage {
    /// Declared occupied bytes in the page. Informational.
    pub bin_tree_size: u32,
    /// Digest width, 0x14.
    pub signature_size: u32,
    pub signatures: Vec<Digest>,
}

impl SignaturePage {
    pub const HEADER_LEN: usize = 4 // bin_tree_size
        + 4                         // signature_size
        + 4                         // signature_count
        + 4;                        // padding

    pub(crate) const PADDING_OFFSET: u64 = 12;

    #[inline]
    pub fn signature_count(&self) -> u32 {
        self.signatures.len() as u32
    }

    /// Bytes actually populated in the block.
    #[inline]
    pub fn occupied_len(&self) -> usize {
        Self::HEADER_LEN + self.signatures.len() * DIGEST_LEN
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureChain {
    pub pages: Vec<SignaturePage>,
}

impl SignatureChain {
    /// Split `digests` into pages of at most `cfg.max_signatures_per_page`.
    pub fn from_digests(digests: &[Digest], cfg: &FormatConfig) -> Self {
        let capacity = (cfg.max_signatures_per_page as usize).max(1);
        let pages = digests
            .chunks(capacity)
            .map(|chunk| SignaturePage {
                bin_tree_size: cfg.full_page_len() as u32,
                signature_size: cfg.signature_size,
                signatures: chunk.to_vec(),
            })
            .collect();
        Self { pages }
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn total_signatures(&self) -> u64 {
        self.pages.iter().map(|p| p.signature_count() as u64).sum()
    }

    /// All digests in chunk order.
    pub fn digests(&self) -> impl Iterator<Item = &Digest> + '_ {
        self.pages.iter().flat_map(|p| p.signatures.iter())
    }

    /// Digest covering chunk `index` of the real file.
    pub fn digest(&self, index: usize) -> Option<&Digest> {
        self.digests().nth(index)
    }
}
