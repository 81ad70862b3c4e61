//! Galois Field GF(2^m) arithmetic for BCH operations
//!
//! ## Representation
//!
//! The field is defined at runtime by a primitive polynomial r(x) of degree m.
//! Elements are kept in a single tagged form, [`FieldElement`]: either zero or
//! a power ρ^e of the root ρ of r(x), with 0 <= e < 2^m - 1. The packed-bit
//! form (a degree < m polynomial stored in a `u32`) is only used to add.
//!
//! Multiplication and division are exponent arithmetic modulo the group order,
//! so there is no polynomial inversion anywhere. Tables are built once per
//! field and never mutated afterwards.

use crate::error::{BchError, Result};
use crate::poly::BinaryPoly;

/// Largest supported extension degree; tables hold 2^m entries
pub const MAX_FIELD_DEGREE: usize = 16;

/// Element of GF(2^m): zero, or ρ^e
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldElement {
    Zero,
    Power(u32),
}

impl FieldElement {
    pub const ONE: FieldElement = FieldElement::Power(0);

    pub fn is_zero(&self) -> bool {
        matches!(self, FieldElement::Zero)
    }

    /// Discrete logarithm, if the element is nonzero
    pub fn exponent(&self) -> Option<u32> {
        match self {
            FieldElement::Zero => None,
            FieldElement::Power(e) => Some(*e),
        }
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldElement::Zero => write!(f, "0"),
            FieldElement::Power(0) => write!(f, "1"),
            FieldElement::Power(1) => write!(f, "a"),
            FieldElement::Power(e) => write!(f, "a^{}", e),
        }
    }
}

/// Multiply a packed field element by x and reduce modulo r(x)
#[inline]
fn mul_x(bits: u32, modulus: u32, degree: usize) -> u32 {
    let shifted = bits << 1;
    if shifted & (1 << degree) != 0 {
        shifted ^ modulus
    } else {
        shifted
    }
}

/// Enumerate x^0, x^1, ... modulo `modulus` until the sequence returns to 1.
///
/// Returns the powers in order (their count is the multiplicative order of x),
/// or `None` if x is not invertible modulo `modulus`.
pub fn power_cycle(modulus: u32, degree: usize) -> Option<Vec<u32>> {
    if degree == 0 || degree > MAX_FIELD_DEGREE || modulus >> degree != 1 {
        return None;
    }
    let limit = (1usize << degree) - 1;
    let mut powers = Vec::with_capacity(limit);
    let mut value = 1u32;
    loop {
        powers.push(value);
        value = mul_x(value, modulus, degree);
        if value == 1 {
            return Some(powers);
        }
        if powers.len() >= limit {
            return None;
        }
    }
}

/// Lookup tables and arithmetic for one GF(2^m)
#[derive(Debug, Clone)]
pub struct GaloisField {
    degree: usize,
    modulus: u32,
    order: u32,
    log: Vec<u32>,
    antilog: Vec<u32>,
}

impl GaloisField {
    /// Build the field defined by `modulus`, which must be primitive:
    /// its root has to generate all 2^m - 1 nonzero elements.
    pub fn new(modulus: &BinaryPoly) -> Result<Self> {
        let degree = modulus
            .degree()
            .filter(|&m| m > 0)
            .ok_or_else(|| BchError::InvalidParameters("r(x) must have degree >= 1".into()))?;
        if degree > MAX_FIELD_DEGREE {
            return Err(BchError::FieldTooLarge {
                m: degree,
                max: MAX_FIELD_DEGREE,
            });
        }
        let bits = modulus.to_u32().ok_or(BchError::FieldTooLarge {
            m: degree,
            max: MAX_FIELD_DEGREE,
        })?;

        let antilog = power_cycle(bits, degree).ok_or_else(|| {
            BchError::InvalidParameters(format!("r(x) = {} does not define a field", modulus))
        })?;
        let count = 1usize << degree;
        if antilog.len() != count - 1 {
            return Err(BchError::InvalidParameters(format!(
                "r(x) = {} is not primitive: its root has order {} instead of {}",
                modulus,
                antilog.len(),
                count - 1
            )));
        }

        let mut log = vec![0u32; count];
        for (e, &value) in antilog.iter().enumerate() {
            log[value as usize] = e as u32;
        }

        Ok(GaloisField {
            degree,
            modulus: bits,
            order: antilog.len() as u32,
            log,
            antilog,
        })
    }

    /// Extension degree m
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Order of the multiplicative group, 2^m - 1
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The field-defining polynomial r(x)
    pub fn modulus(&self) -> BinaryPoly {
        BinaryPoly::from_u32(self.modulus)
    }

    /// ρ^e for any exponent
    pub fn alpha_pow(&self, exponent: u64) -> FieldElement {
        FieldElement::Power((exponent % self.order as u64) as u32)
    }

    /// Element from its packed-bit form; bits above x^(m-1) are reduced first
    pub fn from_bits(&self, bits: u32) -> FieldElement {
        let bits = if bits >> self.degree != 0 {
            self.reduce_bits(bits)
        } else {
            bits
        };
        if bits == 0 {
            FieldElement::Zero
        } else {
            FieldElement::Power(self.log[bits as usize])
        }
    }

    /// Packed-bit form of an element
    pub fn to_bits(&self, element: FieldElement) -> u32 {
        match element {
            FieldElement::Zero => 0,
            FieldElement::Power(e) => self.antilog[e as usize],
        }
    }

    /// p(x) mod r(x), as a field element
    pub fn reduce(&self, poly: &BinaryPoly) -> FieldElement {
        let rem = poly % &self.modulus();
        // The remainder has degree < m <= 16
        self.from_bits(rem.to_u32().unwrap_or(0))
    }

    fn reduce_bits(&self, mut bits: u32) -> u32 {
        for i in (self.degree..32).rev() {
            if bits & (1 << i) != 0 {
                bits ^= self.modulus << (i - self.degree);
            }
        }
        bits
    }

    #[inline]
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        match (a, b) {
            (FieldElement::Zero, x) | (x, FieldElement::Zero) => x,
            _ => self.from_bits(self.to_bits(a) ^ self.to_bits(b)),
        }
    }

    #[inline]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        match (a, b) {
            (FieldElement::Power(x), FieldElement::Power(y)) => {
                FieldElement::Power(((x as u64 + y as u64) % self.order as u64) as u32)
            }
            _ => FieldElement::Zero,
        }
    }

    /// Exponent subtraction; dividing by zero is an error, not a panic
    #[inline]
    pub fn div(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement> {
        match (a, b) {
            (_, FieldElement::Zero) => Err(BchError::DivisionByZero),
            (FieldElement::Zero, _) => Ok(FieldElement::Zero),
            (FieldElement::Power(x), FieldElement::Power(y)) => {
                Ok(FieldElement::Power((x + self.order - y) % self.order))
            }
        }
    }

    pub fn pow(&self, base: FieldElement, exponent: u64) -> FieldElement {
        match base {
            _ if exponent == 0 => FieldElement::ONE,
            FieldElement::Zero => FieldElement::Zero,
            FieldElement::Power(e) => {
                let order = self.order as u64;
                self.alpha_pow(e as u64 * (exponent % order))
            }
        }
    }

    pub fn inverse(&self, a: FieldElement) -> Result<FieldElement> {
        self.div(FieldElement::ONE, a)
    }

    /// Evaluate a binary polynomial at `x`
    pub fn eval_binary(&self, poly: &BinaryPoly, x: FieldElement) -> FieldElement {
        let step = match x {
            FieldElement::Zero => return self.from_bits(poly.coeff(0) as u32),
            FieldElement::Power(e) => e as u64,
        };
        let order = self.order as u64;
        let bits = poly
            .coeffs()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .fold(0u32, |acc, (i, _)| {
                acc ^ self.antilog[((i as u64 % order) * step % order) as usize]
            });
        self.from_bits(bits)
    }

    /// Evaluate a polynomial with field coefficients (low degree first) at `x`
    pub fn eval(&self, coeffs: &[FieldElement], x: FieldElement) -> FieldElement {
        coeffs
            .iter()
            .rev()
            .fold(FieldElement::Zero, |acc, &c| self.add(self.mul(acc, x), c))
    }

    /// Multiply a field-coefficient polynomial by (x + root)
    pub fn mul_linear(&self, coeffs: &[FieldElement], root: FieldElement) -> Vec<FieldElement> {
        let mut out = vec![FieldElement::Zero; coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            out[i + 1] = self.add(out[i + 1], c);
            out[i] = self.add(out[i], self.mul(c, root));
        }
        out
    }
}
