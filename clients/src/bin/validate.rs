//! `gatewheel-validate`: Audits a knowledge document against the wheel.
//!
//! **Usage:**
//! ```text
//! gatewheel-validate <FILE> --shape <SHAPE> [--require <FIELD>,...] [--json]
//! gatewheel-validate --template --shape <SHAPE> [--require <FIELD>,...]
//! ```
//!
//! Shapes: `gate`, `line`, `quarter`, `face`, `lower-trigram`,
//! `upper-trigram`, `connection`, `partition`.
//!
//! Exits non-zero if the document has any violation.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Result};
use clap::Parser;
use gatewheel_conformance::{fixtures, validate_file, DocumentShape, ValidationOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Validate a gatewheel knowledge document.
#[derive(Parser)]
#[command(
    name = "gatewheel-validate",
    about = "Check a knowledge document against the gate-wheel geometry"
)]
struct Args {
    /// JSON document to validate.
    file: Option<PathBuf>,

    /// Document shape.
    #[arg(long)]
    shape: DocumentShape,

    /// Content fields every entry must carry.
    #[arg(long, value_delimiter = ',')]
    require: Vec<String>,

    /// Print a known-good document of the shape instead of validating.
    #[arg(long, conflicts_with = "file")]
    template: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.template {
        let fields: Vec<&str> = args.require.iter().map(String::as_str).collect();
        let document = fixtures::document(args.shape, &fields)?;
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let Some(path) = args.file else {
        bail!("a document path or --template is required");
    };
    let options = ValidationOptions::default().with_required_fields(args.require);
    let report = validate_file(&path, args.shape, &options)?;
    tracing::info!(
        file = %path.display(),
        shape = %args.shape,
        violations = report.len(),
        "validation finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Gatewheel Docking Report: {} ({})", path.display(), args.shape);
        println!("========================");
        println!();
        for violation in report.iter() {
            println!("[FAIL] {violation}");
        }
        println!();
    }

    if !report.passed() {
        eprintln!("Validation FAILED: {} violation(s).", report.len());
        process::exit(1);
    }

    if !args.json {
        println!("Validation PASSED.");
    }
    Ok(())
}
