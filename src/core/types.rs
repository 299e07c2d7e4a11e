//! Shared types used across matinv modules
//!
//! Contains the dense square matrix type and its basic operations.

use serde::{Deserialize, Serialize};

use crate::core::error::{MatinvError, Result};

/// A dense square matrix of f64 values, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    /// Number of rows (== number of columns)
    size: usize,
    /// Row-major element storage, length size * size
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from nested rows, validating that the input is square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(MatinvError::shape("matrix must have at least one row"));
        }

        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatinvError::shape(format!(
                    "matrix must be square: {} rows but row {} has {} columns",
                    size,
                    i,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { size, data })
    }

    /// The n x n identity matrix
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = 1.0;
        }
        Self { size, data }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Element at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size()`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        self.data[row * self.size + col]
    }

    /// Set the element at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size()`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        self.data[row * self.size + col] = value;
    }

    /// The matrix as nested rows
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size).map(|r| r.to_vec()).collect()
    }

    /// Largest absolute value among all elements
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Matrix product self * other
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.size != other.size {
            return Err(MatinvError::shape(format!(
                "cannot multiply a {0}x{0} matrix by a {1}x{1} matrix",
                self.size, other.size
            )));
        }

        let n = self.size;
        let mut product = Matrix {
            size: n,
            data: vec![0.0; n * n],
        };
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                for j in 0..n {
                    product.data[i * n + j] += a * other.get(k, j);
                }
            }
        }
        Ok(product)
    }

    /// Largest elementwise distance from the identity matrix
    pub fn max_identity_deviation(&self) -> f64 {
        let mut max = 0.0f64;
        for i in 0..self.size {
            for j in 0..self.size {
                let expected = if i == j { 1.0 } else { 0.0 };
                max = max.max((self.get(i, j) - expected).abs());
            }
        }
        max
    }

    /// Render with a given number of decimal places, columns right-aligned
    pub fn format_with_precision(&self, precision: usize) -> String {
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|v| format!("{:.*}", precision, v))
            .collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (i, row) in cells.chunks(self.size).enumerate() {
            out.push(if i == 0 { '[' } else { ' ' });
            out.push('[');
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    out.push_str("  ");
                }
                out.push_str(&format!("{:>width$}", cell, width = width));
            }
            out.push(']');
            if i + 1 == self.size {
                out.push(']');
            } else {
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_with_precision(4))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatinvError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows()
    }
}
