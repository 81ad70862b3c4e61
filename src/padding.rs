//! Bit padding of arbitrary-length payloads into whole blocks
//!
//! A single 1 marker is appended, followed by zeros up to the next multiple of
//! the block size. An already aligned payload gains a full block, so the
//! marker is always present and unpadding is unambiguous.

use crate::error::{BchError, Result};

/// Pad `bits` to a nonzero multiple of `block_size`
pub fn pad(bits: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0);
    let padded_len = (bits.len() / block_size + 1) * block_size;
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(bits);
    padded.push(1);
    padded.resize(padded_len, 0);
    padded
}

/// Strip the zeros and the marker appended by [`pad`]
pub fn unpad(bits: &[u8]) -> Result<Vec<u8>> {
    let marker = bits
        .iter()
        .rposition(|&b| b != 0)
        .ok_or(BchError::InvalidPadding)?;
    Ok(bits[..marker].to_vec())
}
