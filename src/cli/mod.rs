//! CLI module - command-line interface
//!
//! Contains matrix literal parsing and report rendering.

pub mod commands;

pub use commands::{demo_report, inversion_report, parse_matrix};
