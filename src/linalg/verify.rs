//! Inverse verification
//!
//! Multiplies a matrix by its computed inverse and checks that the product
//! is the identity matrix within a floating-point tolerance.

use crate::core::error::Result;
use crate::core::types::Matrix;

/// Default elementwise tolerance for the identity check
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// The product original * inverse, for inspection or display
pub fn verification_product(original: &Matrix, inverse: &Matrix) -> Result<Matrix> {
    original.multiply(inverse)
}

/// Check that original * inverse approximates the identity matrix.
///
/// Every element must be within `tolerance` of the expected identity entry
/// (1 on the diagonal, 0 elsewhere).
pub fn verify(original: &Matrix, inverse: &Matrix, tolerance: f64) -> Result<bool> {
    let product = verification_product(original, inverse)?;
    Ok(product.max_identity_deviation() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::invert::invert;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_verify_computed_inverse() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let inv = invert(&m).unwrap();
        assert!(verify(&m, &inv, DEFAULT_TOLERANCE).unwrap());
        // Both orders must approximate the identity
        assert!(verify(&inv, &m, DEFAULT_TOLERANCE).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_inverse() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let not_inverse = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(!verify(&m, &not_inverse, DEFAULT_TOLERANCE).unwrap());
    }

    #[test]
    fn test_verify_tolerance_boundary() {
        let m = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let perturbed = matrix(vec![vec![1.0, 1e-6], vec![0.0, 1.0]]);
        assert!(!verify(&m, &perturbed, 1e-8).unwrap());
        assert!(verify(&m, &perturbed, 1e-3).unwrap());
    }

    #[test]
    fn test_verification_product_is_identity() {
        let m = matrix(vec![vec![3.0, -4.0], vec![1.0, 5.0]]);
        let inv = invert(&m).unwrap();
        let product = verification_product(&m, &inv).unwrap();
        assert!(product.max_identity_deviation() < 1e-12);
    }

    #[test]
    fn test_verify_size_mismatch() {
        let a = Matrix::identity(2);
        let b = Matrix::identity(3);
        assert!(verify(&a, &b, DEFAULT_TOLERANCE).is_err());
    }
}
