//! signatures/encode.rs

use crate::constants::DIGEST_LEN;
use crate::signatures::types::{SignatureChain, SignaturePage};
use crate::types::{ParseError, Result};
use crate::utils::{put_bytes, put_u32};

/// Encode a page as one zero-padded block.
pub fn encode_signature_page_le(p: &SignaturePage, block_size: u32) -> Result<Vec<u8>> {
    let block = block_size as usize;
    if p.occupied_len() > block {
        return Err(ParseError::InvalidConfig(format!(
            "page with {} signatures ({} bytes) does not fit block_size {:#x}",
            p.signatures.len(),
            p.occupied_len(),
            block_size
        )));
    }

    let mut out = vec![0u8; block];
    let mut i = 0usize;

    put_u32(&mut out, &mut i, p.bin_tree_size);      // 0..4   occupied bytes
    put_u32(&mut out, &mut i, p.signature_size);     // 4..8   digest width
    put_u32(&mut out, &mut i, p.signature_count());  // 8..12  digests in this page
    put_u32(&mut out, &mut i, 0);                    // 12..16 padding
    for sig in &p.signatures {
        put_bytes(&mut out, &mut i, sig);
    }

    debug_assert_eq!(i, SignaturePage::HEADER_LEN + p.signatures.len() * DIGEST_LEN);

    Ok(out)
}

/// Encode every page of a chain back to back.
pub fn encode_signature_chain_le(chain: &SignatureChain, block_size: u32) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(chain.page_count() * block_size as usize);
    for page in &chain.pages {
        out.extend_from_slice(&encode_signature_page_le(page, block_size)?);
    }
    Ok(out)
}
