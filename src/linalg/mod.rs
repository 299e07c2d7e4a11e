//! Linear algebra module - inversion and verification
//!
//! Contains the Gauss-Jordan inversion routine and the identity-check
//! verification step.

pub mod invert;
pub mod verify;

pub use invert::{determinant, invert, invert_with_epsilon};
pub use verify::{verification_product, verify};
