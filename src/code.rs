//! The immutable BCH code descriptor
//!
//! A [`Code`] bundles the user parameters (n, b, d), the derived ones
//! (k, t, m), the field-defining polynomial r(x), the generator g(x) and the
//! field tables built from r(x). It is created by
//! [`generate`](crate::generator::generate) or loaded from a code file, and is
//! shared read-only by every encode and decode call afterwards.

use log::debug;

use crate::error::{BchError, Result};
use crate::galois::{FieldElement, GaloisField, MAX_FIELD_DEGREE};
use crate::generator::multiplicative_order;
use crate::poly::BinaryPoly;

/// Alphabet size; only binary codes are supported
pub const Q: usize = 2;

#[derive(Debug, Clone)]
pub struct Code {
    n: usize,
    b: usize,
    d: usize,
    k: usize,
    t: usize,
    m: usize,
    field_poly: BinaryPoly,
    generator: BinaryPoly,
    field: GaloisField,
    root: FieldElement,
}

/// Reject parameter combinations that can never describe a code
pub(crate) fn check_parameters(n: usize, b: usize, d: usize) -> Result<()> {
    if n < 3 {
        return Err(BchError::InvalidParameters(format!(
            "block length n must be at least 3, got {}",
            n
        )));
    }
    if b < 1 {
        return Err(BchError::InvalidParameters(
            "starting root index b must be at least 1".into(),
        ));
    }
    if d < 1 {
        return Err(BchError::InvalidParameters(
            "design distance d must be at least 1".into(),
        ));
    }
    // d - 1 >= n roots cover every residue mod n, so g(x) would be x^n + 1
    if d > n {
        return Err(BchError::InvalidParameters(format!(
            "design distance d = {} exceeds the block length n = {}",
            d, n
        )));
    }
    if b.checked_add(d).is_none() {
        return Err(BchError::InvalidParameters(format!(
            "root exponents b = {} through b + d - 2 overflow",
            b
        )));
    }
    Ok(())
}

/// Extension degree m for block length n, within the supported range
pub(crate) fn extension_degree(n: usize) -> Result<usize> {
    let m = multiplicative_order(Q, n).ok_or(BchError::NoValidExtension { n })?;
    if m > MAX_FIELD_DEGREE {
        return Err(BchError::FieldTooLarge {
            m,
            max: MAX_FIELD_DEGREE,
        });
    }
    Ok(m)
}

impl Code {
    /// Assemble a code from its defining data, checking every invariant:
    /// r(x) is primitive of degree m = ord_n(2), 0 < deg g < n, g(x) divides
    /// x^n + 1, and g vanishes at the d - 1 consecutive roots starting at b.
    ///
    /// No polynomial search is performed, so this is what loading uses.
    pub fn from_parts(
        n: usize,
        b: usize,
        d: usize,
        field_poly: BinaryPoly,
        generator: BinaryPoly,
    ) -> Result<Self> {
        check_parameters(n, b, d)?;
        let m = extension_degree(n)?;

        if field_poly.degree() != Some(m) {
            return Err(BchError::InvalidParameters(format!(
                "r(x) = {} must have degree m = {}",
                field_poly, m
            )));
        }
        let field = GaloisField::new(&field_poly)?;

        let g_degree = match generator.degree() {
            Some(deg) if deg > 0 && deg < n => deg,
            _ => {
                return Err(BchError::InvalidParameters(format!(
                    "generator g(x) = {} must have degree between 1 and {}",
                    generator,
                    n - 1
                )))
            }
        };
        if !generator.divides(&BinaryPoly::cyclic_modulus(n)) {
            return Err(BchError::InvalidParameters(format!(
                "generator g(x) does not divide x^{} + 1",
                n
            )));
        }

        // Primitive n-th root of unity: rho^((2^m - 1) / n)
        let root = field.alpha_pow((field.order() as usize / n) as u64);
        for i in b..b + d - 1 {
            let value = field.eval_binary(&generator, field.pow(root, i as u64));
            if !value.is_zero() {
                return Err(BchError::InvalidParameters(format!(
                    "generator g(x) does not vanish at alpha^{}",
                    i
                )));
            }
        }

        let code = Code {
            n,
            b,
            d,
            k: n - g_degree,
            t: (d - 1) / 2,
            m,
            field_poly,
            generator,
            field,
            root,
        };
        debug!(
            "BCH code (n={}, k={}, q={}, m={}, b={}, d={}, t={}), r(x) = {}, g(x) = {}",
            code.n, code.k, Q, code.m, code.b, code.d, code.t, code.field_poly, code.generator
        );
        Ok(code)
    }

    /// Block length
    pub fn n(&self) -> usize {
        self.n
    }

    /// First exponent of the consecutive root run
    pub fn b(&self) -> usize {
        self.b
    }

    /// Design distance
    pub fn d(&self) -> usize {
        self.d
    }

    /// Message length, n - deg g
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of correctable errors, floor((d - 1) / 2)
    pub fn t(&self) -> usize {
        self.t
    }

    /// Extension degree of the field
    pub fn m(&self) -> usize {
        self.m
    }

    pub fn q(&self) -> usize {
        Q
    }

    /// Field-defining polynomial r(x)
    pub fn field_poly(&self) -> &BinaryPoly {
        &self.field_poly
    }

    /// Generator polynomial g(x)
    pub fn generator(&self) -> &BinaryPoly {
        &self.generator
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// The primitive n-th root of unity whose powers b..b+d-2 are roots of g(x)
    pub fn root(&self) -> FieldElement {
        self.root
    }

    /// root^i
    pub fn root_pow(&self, i: usize) -> FieldElement {
        self.field.pow(self.root, i as u64)
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self.b == other.b
            && self.d == other.d
            && self.field_poly == other.field_poly
            && self.generator == other.generator
    }
}

impl Eq for Code {}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BCH(n={}, k={}, d={}, b={}, t={}) over GF(2^{})",
            self.n, self.k, self.d, self.b, self.t, self.m
        )
    }
}
