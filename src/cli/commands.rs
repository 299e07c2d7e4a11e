//! CLI commands
//!
//! Matrix literal parsing and report rendering for the command line.

use crate::core::config::Config;
use crate::core::error::{MatinvError, Result};
use crate::core::types::Matrix;
use crate::linalg::{determinant, invert_with_epsilon, verification_product};

/// Parse a matrix literal.
///
/// Accepts JSON nested arrays (`[[1,2],[3,4]]`) or the compact row form
/// with `;` between rows and `,` between elements (`1,2;3,4`).
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MatinvError::parse("empty matrix literal"));
    }

    if input.starts_with('[') {
        let rows: Vec<Vec<f64>> = serde_json::from_str(input)
            .map_err(|e| MatinvError::parse(format!("invalid JSON matrix literal: {}", e)))?;
        return Matrix::from_rows(rows);
    }

    let mut rows = Vec::new();
    for row_text in input.split(';') {
        let mut row = Vec::new();
        for cell in row_text.split(',') {
            let value: f64 = cell.trim().parse().map_err(|_| {
                MatinvError::parse(format!("invalid matrix element: '{}'", cell.trim()))
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    Matrix::from_rows(rows)
}

/// Render the full inversion report for one matrix.
///
/// Prints the original matrix, then either the inverse (plus the
/// verification product and identity check when enabled) or the caught
/// singularity diagnostic. Singular input is reported, never fatal.
pub fn inversion_report(matrix: &Matrix, config: &Config) -> String {
    let precision = config.output.precision;
    let mut out = format!(
        "Original Matrix:\n{}\n",
        matrix.format_with_precision(precision)
    );

    match invert_with_epsilon(matrix, config.numerics.pivot_epsilon) {
        Ok(inverse) => {
            out.push_str(&format!(
                "\nInverse Matrix:\n{}\n",
                inverse.format_with_precision(precision)
            ));

            if config.output.verify {
                // multiply cannot fail here: the inverse has the input's size
                if let Ok(product) = verification_product(matrix, &inverse) {
                    let is_identity =
                        product.max_identity_deviation() <= config.numerics.tolerance;
                    out.push_str(&format!(
                        "\nVerification (Original * Inverse):\n{}\n",
                        product.format_with_precision(precision)
                    ));
                    out.push_str(&format!(
                        "\nIs the product the identity matrix? {}\n",
                        is_identity
                    ));
                }
            }
        }
        Err(e) => {
            out.push_str(&format!(
                "\nMatrix inversion failed: {} (determinant = {:.*})\n",
                e,
                precision,
                determinant(matrix)
            ));
        }
    }

    out
}

/// Example matrices exercised by `--demo`, including one singular case
pub fn demo_matrices() -> Vec<Matrix> {
    let examples = vec![
        vec![vec![3.0, -4.0], vec![1.0, 5.0]],
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![vec![4.0, 7.0], vec![3.0, 6.0]],
        vec![vec![1.0, 2.0], vec![2.0, 4.0]],
    ];
    examples
        .into_iter()
        .map(|rows| Matrix::from_rows(rows).expect("demo matrices are square"))
        .collect()
}

/// Render the demo report: every example matrix, one section each
pub fn demo_report(config: &Config) -> String {
    let mut out = String::new();
    for (i, matrix) in demo_matrices().iter().enumerate() {
        if i > 0 {
            out.push_str("\n────────────────────────────\n\n");
        }
        out.push_str(&inversion_report(matrix, config));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_literal() {
        let m = parse_matrix("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(m.rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_compact_literal() {
        let m = parse_matrix("1, 2; 3, 4").unwrap();
        assert_eq!(m.rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_negative_and_float() {
        let m = parse_matrix("3,-4;1,5.5").unwrap();
        assert_eq!(m.get(0, 1), -4.0);
        assert_eq!(m.get(1, 1), 5.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_matrix("1,x;3,4"), Err(MatinvError::Parse(_))));
        assert!(matches!(parse_matrix(""), Err(MatinvError::Parse(_))));
        assert!(matches!(
            parse_matrix("[[1,2],[3]"),
            Err(MatinvError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert!(matches!(
            parse_matrix("1,2,3;4,5,6"),
            Err(MatinvError::Shape(_))
        ));
    }

    #[test]
    fn test_inversion_report_success() {
        let config = Config::default();
        let m = parse_matrix("[[1,2],[3,4]]").unwrap();
        let report = inversion_report(&m, &config);
        assert!(report.contains("Original Matrix:"));
        assert!(report.contains("Inverse Matrix:"));
        assert!(report.contains("-2.0000"));
        assert!(report.contains("Verification (Original * Inverse):"));
        assert!(report.contains("Is the product the identity matrix? true"));
    }

    #[test]
    fn test_inversion_report_no_verify() {
        let mut config = Config::default();
        config.output.verify = false;
        let m = parse_matrix("[[1,2],[3,4]]").unwrap();
        let report = inversion_report(&m, &config);
        assert!(report.contains("Inverse Matrix:"));
        assert!(!report.contains("Verification"));
    }

    #[test]
    fn test_inversion_report_singular() {
        let config = Config::default();
        let m = parse_matrix("[[1,2],[2,4]]").unwrap();
        let report = inversion_report(&m, &config);
        assert!(report.contains("Matrix inversion failed: matrix is singular"));
        assert!(report.contains("(determinant = 0.0000)"));
        assert!(!report.contains("Inverse Matrix:"));
    }

    #[test]
    fn test_demo_report_covers_all_examples() {
        let config = Config::default();
        let report = demo_report(&config);
        // Three invertible examples and one caught singular case
        assert_eq!(report.matches("Inverse Matrix:").count(), 3);
        assert_eq!(report.matches("Matrix inversion failed").count(), 1);
    }
}
