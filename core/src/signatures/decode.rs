//! signatures/decode.rs
//!
//! Reads the signature pages that follow a file entry.
//!
//! Design notes:
//! - `remaining` starts at the entry's chunk count and strictly decreases per page;
//!   the loop ends at zero. No on-disk page count is trusted.
//! - Each page must declare exactly `min(remaining, capacity)` signatures.
//! - Each page consumes exactly one block; trailing bytes are skipped unread.

use tracing::{debug, trace, warn};

use crate::config::FormatConfig;
use crate::constants::DIGEST_LEN;
use crate::cursor::BinaryCursor;
use crate::signatures::types::{SignatureChain, SignaturePage};
use crate::table::FileTableEntry;
use crate::types::{ParseError, Result};

/// Read one page that should carry `min(remaining, capacity)` digests.
pub fn read_signature_page(
    cur: &mut BinaryCursor<'_>,
    block_size: u32,
    remaining: u32,
    capacity: u32,
    cfg: &FormatConfig,
) -> Result<SignaturePage> {
    debug_assert!(cur.is_block_aligned(block_size as usize));
    let base = cur.position();

    let bin_tree_size   = cur.read_u32_le()?;   // 0..4   occupied bytes
    let signature_size  = cur.read_u32_le()?;   // 4..8   digest width
    let signature_count = cur.read_u32_le()?;   // 8..12  digests in this page
    let padding         = cur.read_u32_le()?;   // 12..16 padding

    if signature_size != cfg.signature_size {
        return Err(ParseError::SizeMismatch {
            offset: base + 4,
            field: "signature_size",
            expected: cfg.signature_size as u64,
            actual: signature_size as u64,
        });
    }

    if padding != 0 {
        return Err(ParseError::ReservedNonZero {
            offset: base + SignaturePage::PADDING_OFFSET,
            field: "page padding",
            actual: padding as u64,
        });
    }

    if signature_count > capacity {
        return Err(ParseError::CountMismatch {
            offset: base + 8,
            field: "signature_count (page capacity)",
            expected: capacity as u64,
            actual: signature_count as u64,
        });
    }

    let present = remaining.min(capacity);
    if signature_count != present {
        return Err(ParseError::CountMismatch {
            offset: base + 8,
            field: "signature_count",
            expected: present as u64,
            actual: signature_count as u64,
        });
    }

    if bin_tree_size as usize != cfg.full_page_len() {
        warn!(
            offset = base,
            bin_tree_size,
            expected = cfg.full_page_len(),
            "unexpected signature page bin tree size"
        );
    }

    let mut signatures = Vec::with_capacity(signature_count as usize);
    for _ in 0..signature_count {
        signatures.push(cur.read_array::<DIGEST_LEN>()?);
    }

    cur.skip_to_block_boundary(block_size as usize)?;

    trace!(offset = base, signature_count, remaining, "parsed signature page");

    Ok(SignaturePage {
        bin_tree_size,
        signature_size,
        signatures,
    })
}

/// Read the full chain for a file entry. The cursor must sit just after the entry block.
pub fn read_signature_chain(
    cur: &mut BinaryCursor<'_>,
    entry: &FileTableEntry,
    block_size: u32,
    cfg: &FormatConfig,
) -> Result<SignatureChain> {
    let base = cur.position();
    let total = entry.total_chunk_count;
    let capacity = entry.max_signatures_per_page;
    if capacity == 0 {
        // Field lives in the entry block just before the chain.
        return Err(ParseError::SizeMismatch {
            offset: base.saturating_sub(block_size as u64) + 16,
            field: "max_signatures_per_page",
            expected: cfg.max_signatures_per_page as u64,
            actual: 0,
        });
    }

    // chunk count is untrusted until the pages are read; never reserve past the input
    let max_fit = cur.remaining() / block_size as usize;
    let mut pages = Vec::with_capacity(entry.expected_page_count().min(max_fit));
    let mut remaining = total;

    while remaining > 0 {
        let page_offset = cur.position();
        let page = read_signature_page(cur, block_size, remaining, capacity, cfg)?;
        let consumed = page.signature_count();
        remaining = remaining
            .checked_sub(consumed)
            .ok_or_else(|| ParseError::CountMismatch {
                offset: page_offset + 8,
                field: "signature_count (remaining chunks)",
                expected: remaining as u64,
                actual: consumed as u64,
            })?;
        pages.push(page);
    }

    let chain = SignatureChain { pages };

    if chain.total_signatures() != total as u64 {
        return Err(ParseError::CountMismatch {
            offset: base,
            field: "chain signature total",
            expected: total as u64,
            actual: chain.total_signatures(),
        });
    }
    debug_assert_eq!(chain.page_count(), entry.expected_page_count());

    debug!(
        offset = base,
        pages = chain.page_count(),
        signatures = chain.total_signatures(),
        "parsed signature chain"
    );

    Ok(chain)
}
