//! BCH code construction
//!
//! Builds a [`Code`] from (n, b, d):
//!
//! 1. m = ord_n(2), the degree of the smallest binary field holding the n-th
//!    roots of unity
//! 2. r(x) = the first primitive polynomial of degree m in increasing bit
//!    order (irreducibility by trial division, then order by enumerating powers)
//! 3. the minimal polynomial of β^i for every i in b..=b+d-2, where
//!    β = ρ^((2^m - 1) / n) is a primitive n-th root of unity
//! 4. g(x) = lcm of those minimal polynomials

use log::{debug, info};

use crate::code::{check_parameters, extension_degree, Code};
use crate::error::{BchError, Result};
use crate::galois::{power_cycle, FieldElement, GaloisField};
use crate::poly::BinaryPoly;

/// Smallest m >= 1 with base^m = 1 (mod modulus), searching m in 1..=modulus
pub fn multiplicative_order(base: usize, modulus: usize) -> Option<usize> {
    if modulus < 2 {
        return None;
    }
    let base = (base % modulus) as u64;
    let modulus = modulus as u64;
    let mut value = base;
    for i in 1..=modulus {
        if value == 1 {
            return Some(i as usize);
        }
        value = value * base % modulus;
    }
    None
}

/// Degree of a packed binary polynomial (0 for the zero word)
fn word_degree(word: u32) -> usize {
    31usize.saturating_sub(word.leading_zeros() as usize)
}

/// Remainder of carry-less division of packed binary polynomials
fn word_rem(mut dividend: u32, divisor: u32) -> u32 {
    let dd = word_degree(divisor);
    while dividend != 0 && word_degree(dividend) >= dd {
        dividend ^= divisor << (word_degree(dividend) - dd);
    }
    dividend
}

/// Irreducibility over GF(2) by trial division with every polynomial of
/// degree 1..=deg/2
pub fn is_irreducible(word: u32) -> bool {
    let degree = word_degree(word);
    if word < 2 {
        return false;
    }
    if degree == 1 {
        return true;
    }
    // Divisible by x
    if word & 1 == 0 {
        return false;
    }
    let max_divisor = 1u32 << (degree / 2 + 1);
    (2..max_divisor).all(|divisor| word_rem(word, divisor) != 0)
}

/// Whether the root of `word` generates all 2^m - 1 nonzero field elements
pub fn is_primitive(word: u32) -> bool {
    let degree = word_degree(word);
    is_irreducible(word)
        && power_cycle(word, degree).is_some_and(|powers| powers.len() == (1 << degree) - 1)
}

/// First primitive polynomial of degree m, candidates tried in increasing order
pub fn find_primitive_polynomial(m: usize, n: usize) -> Result<BinaryPoly> {
    let first = (1u32 << m) | 1;
    let last = (1u32 << (m + 1)) - 1;
    let mut rejected = 0usize;
    for candidate in (first..=last).step_by(2) {
        if !is_irreducible(candidate) {
            continue;
        }
        if is_primitive(candidate) {
            debug!(
                "Accepted r(x) = {} after rejecting {} irreducible candidates",
                BinaryPoly::from_u32(candidate),
                rejected
            );
            return Ok(BinaryPoly::from_u32(candidate));
        }
        rejected += 1;
    }
    Err(BchError::NoValidExtension { n })
}

/// Minimal polynomial over GF(2) of root^i, where `root` has order n.
///
/// Multiplies (x + root^c) over the conjugacy class c in {i * 2^j mod n}; the
/// product has all its coefficients in GF(2) when the class is complete.
pub fn minimal_polynomial(
    field: &GaloisField,
    root: FieldElement,
    i: usize,
    n: usize,
) -> Result<BinaryPoly> {
    let mut seen = vec![false; n];
    let mut product = vec![FieldElement::ONE];
    let mut c = i % n;
    while !seen[c] {
        seen[c] = true;
        product = field.mul_linear(&product, field.pow(root, c as u64));
        c = c * 2 % n;
    }

    let coeffs = product
        .iter()
        .map(|&coeff| match coeff {
            FieldElement::Zero => Ok(0u8),
            FieldElement::ONE => Ok(1u8),
            _ => Err(BchError::MinimalPolynomialError { exponent: i }),
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(BinaryPoly::new(coeffs))
}

/// Build the BCH code with block length `n`, first root exponent `b` and
/// design distance `d`
pub fn generate(n: usize, b: usize, d: usize) -> Result<Code> {
    check_parameters(n, b, d)?;
    let m = extension_degree(n)?;
    info!("Generating BCH code (n={}, b={}, d={}, m={})", n, b, d, m);

    let field_poly = find_primitive_polynomial(m, n)?;
    info!("r(x) = {}", field_poly);
    let field = GaloisField::new(&field_poly)?;
    let root = field.alpha_pow((field.order() as usize / n) as u64);

    let mut generator = BinaryPoly::one();
    for i in b..b + d - 1 {
        let minimal = minimal_polynomial(&field, root, i, n)?;
        debug!("m_{}(x) = {}", i, minimal);
        generator = generator.lcm(&minimal);
    }
    info!("g(x) = {}", generator);

    match generator.degree() {
        Some(deg) if deg > 0 && deg < n => {}
        _ => {
            return Err(BchError::InvalidParameters(format!(
                "b = {} and d = {} give generator g(x) = {} for n = {}, leaving no message bits \
                 or no redundancy",
                b, d, generator, n
            )))
        }
    }

    Code::from_parts(n, b, d, field_poly, generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplicative_order() {
        assert_eq!(multiplicative_order(2, 7), Some(3));
        assert_eq!(multiplicative_order(2, 15), Some(4));
        assert_eq!(multiplicative_order(2, 9), Some(6));
        assert_eq!(multiplicative_order(2, 23), Some(11));
        assert_eq!(multiplicative_order(2, 8), None);
    }

    #[test]
    fn test_irreducibility() {
        assert!(is_irreducible(0b111)); // x^2 + x + 1
        assert!(is_irreducible(0b1011)); // x^3 + x + 1
        assert!(!is_irreducible(0b101)); // (x + 1)^2
        assert!(!is_irreducible(0b10001)); // (x + 1)^4
        assert!(!is_irreducible(0b110)); // x(x + 1)
        assert!(is_irreducible(0b11111)); // irreducible, not primitive
        assert!(!is_primitive(0b11111));
        assert!(is_primitive(0b10011));
    }

    #[test]
    fn test_first_primitive_polynomials() {
        assert_eq!(find_primitive_polynomial(3, 7).unwrap(), BinaryPoly::from_u32(0b1011));
        assert_eq!(find_primitive_polynomial(4, 15).unwrap(), BinaryPoly::from_u32(0b10011));
        assert_eq!(find_primitive_polynomial(8, 255).unwrap(), BinaryPoly::from_u32(0x11D));
    }

    #[test]
    fn test_minimal_polynomials_gf16() {
        let field = GaloisField::new(&BinaryPoly::from_u32(0b10011)).unwrap();
        let root = field.alpha_pow(1);
        // m_1 = x^4 + x + 1, m_3 = x^4 + x^3 + x^2 + x + 1, m_5 = x^2 + x + 1
        assert_eq!(minimal_polynomial(&field, root, 1, 15).unwrap(), BinaryPoly::from_u32(0b10011));
        assert_eq!(minimal_polynomial(&field, root, 2, 15).unwrap(), BinaryPoly::from_u32(0b10011));
        assert_eq!(minimal_polynomial(&field, root, 3, 15).unwrap(), BinaryPoly::from_u32(0b11111));
        assert_eq!(minimal_polynomial(&field, root, 5, 15).unwrap(), BinaryPoly::from_u32(0b111));
        assert_eq!(minimal_polynomial(&field, root, 15, 15).unwrap(), BinaryPoly::from_u32(0b11));
    }

    #[test]
    fn test_generate_double_error_correcting_15() {
        let code = generate(15, 1, 5).unwrap();
        // g = m_1 * m_3 = x^8 + x^7 + x^6 + x^4 + 1
        assert_eq!(code.generator(), &BinaryPoly::from_u32(0b1_1101_0001));
        assert_eq!(code.k(), 7);
        assert_eq!(code.t(), 2);
    }

    #[test]
    fn test_generate_non_primitive_length() {
        // n = 9 lives in GF(64); beta = rho^7 has order 9
        let code = generate(9, 1, 3).unwrap();
        assert_eq!(code.m(), 6);
        assert_eq!(code.generator().degree(), Some(6));
        assert_eq!(code.k(), 3);
    }

    #[test]
    fn test_generate_rejects_trivial_generators() {
        assert!(matches!(generate(7, 1, 1), Err(BchError::InvalidParameters(_))));
        // Every 7th root of unity is covered, so g(x) = x^7 + 1
        assert!(matches!(generate(7, 1, 8), Err(BchError::InvalidParameters(_))));
        assert!(matches!(generate(8, 1, 3), Err(BchError::NoValidExtension { n: 8 })));
    }
}
