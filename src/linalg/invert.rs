//! Matrix inversion via Gauss-Jordan elimination
//!
//! Row-reduces the augmented system [A | I] with partial pivoting until the
//! left half becomes the identity; the right half is then A⁻¹. A matrix is
//! declared singular when no usable pivot remains in a column.

use crate::core::error::{MatinvError, Result};
use crate::core::types::Matrix;

/// Default relative pivot cutoff for declaring a matrix singular
pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-12;

/// Compute the inverse of a square matrix.
///
/// Returns [`MatinvError::Singular`] when the determinant is numerically
/// zero. Pure computation, no side effects.
pub fn invert(matrix: &Matrix) -> Result<Matrix> {
    invert_with_epsilon(matrix, DEFAULT_PIVOT_EPSILON)
}

/// Compute the inverse with an explicit relative pivot cutoff.
///
/// A pivot is rejected when its magnitude falls below
/// `epsilon * max|a_ij|` of the input matrix, so the cutoff scales with the
/// data rather than being an absolute threshold.
pub fn invert_with_epsilon(matrix: &Matrix, epsilon: f64) -> Result<Matrix> {
    let n = matrix.size();
    let scale = matrix.max_abs();
    if scale == 0.0 {
        // The all-zero matrix has determinant zero for every n
        return Err(MatinvError::Singular);
    }
    let cutoff = epsilon * scale;

    // Augmented system [A | I], row-major, 2n columns
    let width = 2 * n;
    let mut aug = vec![0.0; n * width];
    for i in 0..n {
        for j in 0..n {
            aug[i * width + j] = matrix.get(i, j);
        }
        aug[i * width + n + i] = 1.0;
    }

    for col in 0..n {
        // Partial pivoting: pick the row with the largest entry in this column
        let mut pivot_row = col;
        let mut pivot_mag = aug[col * width + col].abs();
        for row in (col + 1)..n {
            let mag = aug[row * width + col].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }

        if pivot_mag <= cutoff {
            return Err(MatinvError::Singular);
        }

        if pivot_row != col {
            for j in 0..width {
                aug.swap(col * width + j, pivot_row * width + j);
            }
        }

        // Normalize the pivot row
        let pivot = aug[col * width + col];
        for j in 0..width {
            aug[col * width + j] /= pivot;
        }

        // Eliminate the column from every other row
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * width + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..width {
                aug[row * width + j] -= factor * aug[col * width + j];
            }
        }
    }

    // The right half is the inverse
    let mut inverse = Matrix::identity(n);
    for i in 0..n {
        for j in 0..n {
            inverse.set(i, j, aug[i * width + n + j]);
        }
    }
    Ok(inverse)
}

/// Determinant via LU-style forward elimination.
///
/// The determinant is the product of the pivots, with the sign flipped once
/// per row swap. Returns 0.0 when a pivot column is exhausted.
pub fn determinant(matrix: &Matrix) -> f64 {
    let n = matrix.size();
    let mut m = matrix.rows();
    let mut det = 1.0;

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = m[col][col].abs();
        for row in (col + 1)..n {
            let mag = m[row][col].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }

        if pivot_mag == 0.0 {
            return 0.0;
        }

        if pivot_row != col {
            m.swap(pivot_row, col);
            det = -det;
        }

        let pivot = m[col][col];
        det *= pivot;

        for row in (col + 1)..n {
            let factor = m[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                m[row][j] -= factor * m[col][j];
            }
        }
    }

    det
}
