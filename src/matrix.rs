//! Dense matrices over GF(2^m) for the error-locator system
//!
//! The decoder only ever needs small systems (at most t x (t + 1)), so the
//! storage is a flat row-major `Vec` and elimination is plain Gauss-Jordan.

use crate::error::{BchError, Result};
use crate::galois::{FieldElement, GaloisField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMatrix {
    rows: usize,
    cols: usize,
    data: Vec<FieldElement>,
}

impl FieldMatrix {
    /// Create a new zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![FieldElement::Zero; rows * cols],
        }
    }

    /// Build a matrix from a generator function of (row, col)
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> FieldElement,
    {
        let mut matrix = Self::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                matrix.set(row, col, f(row, col));
            }
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> FieldElement {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: FieldElement) {
        self.data[row * self.cols + col] = value;
    }

    pub fn column(&self, col: usize) -> Vec<FieldElement> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Leading `size` x `size` submatrix (drops trailing rows and columns)
    pub fn leading_minor(&self, size: usize) -> Self {
        Self::from_fn(size.min(self.rows), size.min(self.cols), |r, c| self.get(r, c))
    }

    /// Append a column on the right
    pub fn augment(&self, column: &[FieldElement]) -> Self {
        Self::from_fn(self.rows, self.cols + 1, |r, c| {
            if c < self.cols {
                self.get(r, c)
            } else {
                column[r]
            }
        })
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Find a row at or below `start` with a nonzero entry in `col`
    fn find_pivot(&self, start: usize, col: usize) -> Option<usize> {
        (start..self.rows).find(|&row| !self.get(row, col).is_zero())
    }

    /// Determinant of a square matrix. In characteristic 2 row swaps do not
    /// change the sign, so it is the product of the elimination pivots.
    pub fn determinant(&self, field: &GaloisField) -> FieldElement {
        debug_assert_eq!(self.rows, self.cols);
        let mut work = self.clone();
        let mut det = FieldElement::ONE;

        for pivot_col in 0..work.rows {
            let Some(pivot_row) = work.find_pivot(pivot_col, pivot_col) else {
                return FieldElement::Zero;
            };
            work.swap_rows(pivot_col, pivot_row);
            let pivot = work.get(pivot_col, pivot_col);
            det = field.mul(det, pivot);

            for row in (pivot_col + 1)..work.rows {
                let entry = work.get(row, pivot_col);
                // pivot is nonzero here
                let Ok(factor) = field.div(entry, pivot) else {
                    return FieldElement::Zero;
                };
                if factor.is_zero() {
                    continue;
                }
                for col in pivot_col..work.cols {
                    let value = field.add(
                        work.get(row, col),
                        field.mul(factor, work.get(pivot_col, col)),
                    );
                    work.set(row, col, value);
                }
            }
        }

        det
    }

    /// Reduce in place to reduced row-echelon form over the coefficient
    /// columns (every column but the last). Fails with `DivisionByZero` when
    /// a column has no nonzero pivot.
    pub fn rref(&mut self, field: &GaloisField) -> Result<()> {
        let pivots = self.rows.min(self.cols.saturating_sub(1));

        for pivot_col in 0..pivots {
            let pivot_row = self
                .find_pivot(pivot_col, pivot_col)
                .ok_or(BchError::DivisionByZero)?;
            self.swap_rows(pivot_col, pivot_row);

            // Scale pivot row
            let pivot = self.get(pivot_col, pivot_col);
            for col in 0..self.cols {
                let value = field.div(self.get(pivot_col, col), pivot)?;
                self.set(pivot_col, col, value);
            }

            // Eliminate column
            for row in 0..self.rows {
                if row == pivot_col {
                    continue;
                }
                let factor = self.get(row, pivot_col);
                if factor.is_zero() {
                    continue;
                }
                for col in 0..self.cols {
                    let value = field.add(
                        self.get(row, col),
                        field.mul(factor, self.get(pivot_col, col)),
                    );
                    self.set(row, col, value);
                }
            }
        }

        Ok(())
    }
}
