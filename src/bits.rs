//! Conversions between byte streams, coefficient vectors and polynomial text
//!
//! Bytes are expanded most significant bit first, so the first bit of the
//! stream is the coefficient of x^0.

use crate::error::{BchError, Result};

/// Expand each byte into 8 coefficients, MSB first
pub fn unpack_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Pack coefficients into bytes, MSB first, zero-filling the last byte
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | (((bit != 0) as u8) << (7 - i)))
        })
        .collect()
}

/// Drop high-order zero coefficients
pub fn trim_trailing_zeros(bits: &[u8]) -> &[u8] {
    let len = bits.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    &bits[..len]
}

/// Parse `[1, 0, 1]`-style text. Brackets are optional; entries may be
/// separated by commas and/or whitespace and must be 0 or 1.
pub fn parse_poly_text(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .map(|rest| {
            rest.strip_suffix(']').ok_or_else(|| {
                BchError::InvalidPolynomialText("missing closing bracket".into())
            })
        })
        .transpose()?
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(BchError::InvalidPolynomialText(format!(
                "coefficient {:?} is not 0 or 1",
                other
            ))),
        })
        .collect()
}

/// Format coefficients as `[1, 0, 1]`
pub fn format_poly_text(bits: &[u8]) -> String {
    let entries: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
    format!("[{}]", entries.join(", "))
}
