//! Systematic cyclic encoding
//!
//! c(x) = x^(n-k) m(x) + (x^(n-k) m(x) mod g(x)). The message occupies the
//! coefficients of x^(n-k) .. x^(n-1) and the parity the low n - k.

use log::debug;

use crate::code::Code;
use crate::error::{BchError, Result};
use crate::poly::BinaryPoly;

/// Encode a message polynomial of degree < k into a codeword of degree < n
pub fn encode(code: &Code, message: &BinaryPoly) -> Result<BinaryPoly> {
    if let Some(degree) = message.degree() {
        if degree >= code.k() {
            return Err(BchError::MessageTooLarge {
                degree,
                k: code.k(),
            });
        }
    }

    let shifted = message.shift(code.n() - code.k());
    let parity = &shifted % code.generator();
    debug!("shifted message: {}, parity: {}", shifted, parity);
    Ok(&shifted + &parity)
}

impl Code {
    /// See [`encode`]
    pub fn encode(&self, message: &BinaryPoly) -> Result<BinaryPoly> {
        encode(self, message)
    }

    /// Encode message coefficients (low degree first) into exactly n coefficients
    pub fn encode_bits(&self, message: &[u8]) -> Result<Vec<u8>> {
        let codeword = encode(self, &BinaryPoly::from_bits(message))?;
        Ok(codeword.to_bits(self.n()))
    }
}
