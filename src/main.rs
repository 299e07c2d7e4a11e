//! matinv - Square-Matrix Inversion Utility
//!
//! Main entry point for the CLI application.

use std::io::Read;

use clap::Parser;
use matinv::cli::{demo_report, inversion_report, parse_matrix};
use matinv::Config;

/// matinv - Square-Matrix Inversion Utility
#[derive(Parser, Debug)]
#[command(name = "matinv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Matrix literal: JSON nested arrays ("[[1,2],[3,4]]") or compact rows
    /// ("1,2;3,4"). Use "-" to read the literal from stdin.
    matrix: Option<String>,

    /// Elementwise tolerance for the identity check
    #[arg(long, short = 't')]
    tolerance: Option<f64>,

    /// Decimal places when printing matrices
    #[arg(long, short = 'p')]
    precision: Option<usize>,

    /// Skip the verification step
    #[arg(long)]
    no_verify: bool,

    /// Run the built-in example matrices, including a singular one
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(tolerance) = args.tolerance {
        config.numerics.tolerance = tolerance;
    }

    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }

    if args.no_verify {
        config.output.verify = false;
    }

    // Demo mode
    if args.demo {
        print!("{}", demo_report(&config));
        return Ok(());
    }

    let Some(literal) = args.matrix else {
        anyhow::bail!("no matrix given. Pass a literal like \"[[1,2],[3,4]]\", or use --demo");
    };

    // "-" reads the literal from stdin
    let literal = if literal == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        literal
    };

    let matrix = parse_matrix(&literal)?;
    print!("{}", inversion_report(&matrix, &config));

    Ok(())
}
