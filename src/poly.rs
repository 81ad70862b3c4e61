//! Polynomials over GF(2)
//!
//! Coefficients are stored low-degree first, one `0`/`1` byte per coefficient,
//! and are always trimmed so that the last stored coefficient is nonzero. The
//! zero polynomial has no coefficients. This keeps the derived equality exact.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Rem};

/// Polynomial with binary coefficients
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BinaryPoly {
    coeffs: Vec<u8>,
}

impl BinaryPoly {
    /// Build a polynomial from coefficients, low degree first.
    /// Any nonzero byte is read as the coefficient 1.
    pub fn new(coeffs: Vec<u8>) -> Self {
        let mut coeffs = coeffs;
        for c in coeffs.iter_mut() {
            *c = (*c != 0) as u8;
        }
        let mut poly = Self { coeffs };
        poly.trim();
        poly
    }

    pub fn from_bits(bits: &[u8]) -> Self {
        Self::new(bits.to_vec())
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// x^k
    pub fn monomial(k: usize) -> Self {
        let mut coeffs = vec![0; k + 1];
        coeffs[k] = 1;
        Self { coeffs }
    }

    /// x^n + 1, whose divisors are the generators of cyclic codes of length n
    pub fn cyclic_modulus(n: usize) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[0] = 1;
        coeffs[n] ^= 1;
        Self::new(coeffs)
    }

    /// Interpret the bits of `word` as coefficients (bit i is the coefficient of x^i)
    pub fn from_u32(word: u32) -> Self {
        let coeffs = (0..32).map(|i| ((word >> i) & 1) as u8).collect();
        Self::new(coeffs)
    }

    /// Pack into a word, or `None` if the degree is 32 or more
    pub fn to_u32(&self) -> Option<u32> {
        if self.coeffs.len() > 32 {
            return None;
        }
        Some(
            self.coeffs
                .iter()
                .enumerate()
                .fold(0u32, |acc, (i, &c)| acc | ((c as u32) << i)),
        )
    }

    /// Coefficients low degree first, without trailing zeros
    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    /// Coefficients low degree first, zero-extended to exactly `len` entries.
    /// Higher coefficients are dropped if the polynomial is longer.
    pub fn to_bits(&self, len: usize) -> Vec<u8> {
        let mut bits = self.coeffs.clone();
        bits.resize(len, 0);
        bits
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Number of nonzero coefficients
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c == 1).count()
    }

    pub fn coeff(&self, i: usize) -> u8 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Toggle the coefficient of x^i
    pub fn flip(&mut self, i: usize) {
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, 0);
        }
        self.coeffs[i] ^= 1;
        self.trim();
    }

    /// Multiply by x^k
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![0; k];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// The polynomial formed by the coefficients of x^start .. x^(end-1), shifted down to x^0
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.coeffs.len());
        if start >= end {
            return Self::zero();
        }
        Self::new(self.coeffs[start..end].to_vec())
    }

    /// Quotient and remainder, or `None` when dividing by the zero polynomial
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let dd = divisor.degree()?;
        if self.coeffs.len() <= dd {
            return Some((Self::zero(), self.clone()));
        }

        let mut rem = self.coeffs.clone();
        let mut quot = vec![0u8; rem.len() - dd];
        for i in (dd..rem.len()).rev() {
            if rem[i] == 0 {
                continue;
            }
            quot[i - dd] = 1;
            for (j, &c) in divisor.coeffs.iter().enumerate() {
                rem[i - dd + j] ^= c;
            }
        }
        Some((Self::new(quot), Self::new(rem)))
    }

    pub fn divides(&self, other: &Self) -> bool {
        other
            .checked_div_rem(self)
            .is_some_and(|(_, rem)| rem.is_zero())
    }

    /// Greatest common divisor (monic, since every nonzero binary polynomial is)
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while let Some((_, rem)) = a.checked_div_rem(&b) {
            a = b;
            b = rem;
        }
        a
    }

    /// Least common multiple
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let gcd = self.gcd(other);
        match (self * other).checked_div_rem(&gcd) {
            Some((quot, _)) => quot,
            None => Self::zero(),
        }
    }

    fn trim(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }
}

impl From<Vec<u8>> for BinaryPoly {
    fn from(coeffs: Vec<u8>) -> Self {
        BinaryPoly::new(coeffs)
    }
}

impl Add for &BinaryPoly {
    type Output = BinaryPoly;

    fn add(self, rhs: &BinaryPoly) -> BinaryPoly {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (c, &s) in coeffs.iter_mut().zip(short.coeffs.iter()) {
            *c ^= s;
        }
        BinaryPoly::new(coeffs)
    }
}

impl Add for BinaryPoly {
    type Output = BinaryPoly;

    fn add(self, rhs: BinaryPoly) -> BinaryPoly {
        &self + &rhs
    }
}

impl AddAssign<&BinaryPoly> for BinaryPoly {
    fn add_assign(&mut self, rhs: &BinaryPoly) {
        *self = &*self + rhs;
    }
}

impl Mul for &BinaryPoly {
    type Output = BinaryPoly;

    fn mul(self, rhs: &BinaryPoly) -> BinaryPoly {
        if self.is_zero() || rhs.is_zero() {
            return BinaryPoly::zero();
        }
        let mut coeffs = vec![0u8; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] ^= b;
            }
        }
        BinaryPoly::new(coeffs)
    }
}

impl Mul for BinaryPoly {
    type Output = BinaryPoly;

    fn mul(self, rhs: BinaryPoly) -> BinaryPoly {
        &self * &rhs
    }
}

/// Panics on a zero divisor, like integer `%`
impl Rem for &BinaryPoly {
    type Output = BinaryPoly;

    fn rem(self, rhs: &BinaryPoly) -> BinaryPoly {
        match self.checked_div_rem(rhs) {
            Some((_, rem)) => rem,
            None => panic!("Division by the zero polynomial"),
        }
    }
}

impl fmt::Display for BinaryPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c == 1)
            .map(|(i, _)| match i {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{}", i),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
