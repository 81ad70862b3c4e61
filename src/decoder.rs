//! Algebraic (Peterson-Gorenstein-Zierler) decoding
//!
//! ## Steps
//!
//! 1. Syndromes s_j = r(β^(b+j)) for j in 0..d-1. All zero: nothing to fix.
//! 2. The t x t Hankel matrix S[i][j] = s[i+j] is singular above the true
//!    error count e, so it is shrunk from the bottom-right until its
//!    determinant is nonzero. The e x e system S·Λ = (s[e], ..., s[2e-1]) is
//!    then solved by Gauss-Jordan elimination.
//! 3. The locator is l(x) = 1 + Λ_1 x + ... + Λ_e x^e, with Λ_1 being the
//!    last entry of the solution column.
//! 4. Every position is tried: l(β^i) = 0 marks an error in the coefficient
//!    of x^((n - i) mod n), i.e. the i-th position from the high-order end.
//!
//! The locator must have exactly e roots among the n candidates. Anything
//! else means more than t errors and the word is reported as uncorrectable.

use log::{debug, info};

use crate::code::Code;
use crate::error::{BchError, Result};
use crate::galois::FieldElement;
use crate::matrix::FieldMatrix;
use crate::poly::BinaryPoly;

/// Outcome of decoding one received word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The k message coefficients, as a polynomial
    pub message: BinaryPoly,
    /// The corrected word, degree < n
    pub codeword: BinaryPoly,
    /// Degrees of the coefficients that were flipped, ascending
    pub corrected: Vec<usize>,
}

impl Decoded {
    pub fn had_errors(&self) -> bool {
        !self.corrected.is_empty()
    }
}

/// Evaluate the received word at β^i for i in b..=b+d-2
pub fn syndromes(code: &Code, received: &BinaryPoly) -> Vec<FieldElement> {
    let field = code.field();
    (code.b()..code.b() + code.d() - 1)
        .map(|i| field.eval_binary(received, code.root_pow(i)))
        .collect()
}

/// Solve for the error-locator coefficients Λ_1..Λ_e (low degree first,
/// starting with the constant term 1)
pub fn error_locator(code: &Code, syndromes: &[FieldElement]) -> Result<Vec<FieldElement>> {
    let field = code.field();
    let full = FieldMatrix::from_fn(code.t(), code.t(), |i, j| syndromes[i + j]);

    let mut size = code.t();
    while size > 0 && full.leading_minor(size).determinant(field).is_zero() {
        size -= 1;
    }
    if size == 0 {
        return Err(BchError::Uncorrectable(
            "every syndrome minor is singular".into(),
        ));
    }
    debug!("error count estimate: {}", size);

    let rhs: Vec<FieldElement> = (0..size).map(|i| syndromes[i + size]).collect();
    let mut system = full.leading_minor(size).augment(&rhs);
    system.rref(field)?;
    let solution = system.column(size);
    debug!("locator solution: {:?}", solution);

    let mut locator = Vec::with_capacity(size + 1);
    locator.push(FieldElement::ONE);
    locator.extend(solution.iter().rev().copied());
    Ok(locator)
}

/// Degrees of the received coefficients in error, from the locator roots
pub fn error_positions(code: &Code, locator: &[FieldElement]) -> Vec<usize> {
    let field = code.field();
    let n = code.n();
    let mut positions: Vec<usize> = (1..=n)
        .filter(|&i| field.eval(locator, code.root_pow(i)).is_zero())
        .map(|i| (n - i) % n)
        .collect();
    positions.sort_unstable();
    positions
}

/// Decode a received word of degree < n, correcting up to t bit errors
pub fn decode(code: &Code, received: &BinaryPoly) -> Result<Decoded> {
    if let Some(degree) = received.degree() {
        if degree >= code.n() {
            return Err(BchError::CodewordTooLarge { degree, n: code.n() });
        }
    }
    let message_start = code.n() - code.k();

    let syndromes = syndromes(code, received);
    debug!(
        "syndromes: [{}]",
        syndromes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if syndromes.iter().all(FieldElement::is_zero) {
        return Ok(Decoded {
            message: received.slice(message_start, code.n()),
            codeword: received.clone(),
            corrected: Vec::new(),
        });
    }

    let locator = error_locator(code, &syndromes)?;
    debug!(
        "l(x) coefficients: [{}]",
        locator
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let positions = error_positions(code, &locator);
    let expected = locator.len() - 1;
    if positions.len() != expected {
        return Err(BchError::Uncorrectable(format!(
            "locator of degree {} has {} roots among the code positions",
            expected,
            positions.len()
        )));
    }

    let mut codeword = received.clone();
    for &position in &positions {
        info!("Repaired error at position {}", position);
        codeword.flip(position);
    }

    Ok(Decoded {
        message: codeword.slice(message_start, code.n()),
        codeword,
        corrected: positions,
    })
}

impl Code {
    /// See [`decode`]
    pub fn decode(&self, received: &BinaryPoly) -> Result<Decoded> {
        decode(self, received)
    }

    /// Decode received coefficients (low degree first) into exactly k message
    /// coefficients
    pub fn decode_bits(&self, received: &[u8]) -> Result<Vec<u8>> {
        let decoded = decode(self, &BinaryPoly::from_bits(received))?;
        Ok(decoded.message.to_bits(self.k()))
    }
}
