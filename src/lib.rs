//! matinv - Square-Matrix Inversion Utility
//!
//! Computes the multiplicative inverse of a square matrix via Gauss-Jordan
//! elimination and verifies the result against the identity matrix.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Linalg**: Gauss-Jordan inversion and identity-check verification
//! - **CLI**: Matrix literal parsing and console report rendering
//!
//! # Usage
//!
//! ```rust
//! use matinv::{invert, verify, Matrix};
//!
//! let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let inverse = invert(&matrix).unwrap();
//! assert!(verify(&matrix, &inverse, 1e-8).unwrap());
//! ```

pub mod cli;
pub mod core;
pub mod linalg;

// Re-export commonly used items
pub use self::core::{Config, MatinvError, Matrix, Result};
pub use linalg::{determinant, invert, invert_with_epsilon, verification_product, verify};
