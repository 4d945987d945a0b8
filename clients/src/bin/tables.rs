//! `gatewheel-tables`: Emits or checks the root input tables.
//!
//! **Usage:**
//! ```text
//! gatewheel-tables [--section <all|identity|sequence|connections|partition>] [--out <FILE>]
//! gatewheel-tables --check <FILE>
//! ```
//!
//! `--check` loads a bundle written by this tool (or edited by hand) and
//! runs the identity and sequence load checks against it. Exits non-zero
//! if either table is rejected.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gatewheel::{IdentityTable, WheelSequence};
use gatewheel_spec::serializer::json;
use gatewheel_spec::RootTables;
use serde_json::Value;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    All,
    Identity,
    Sequence,
    Connections,
    Partition,
}

/// Emit or check the gatewheel root tables.
#[derive(Parser)]
#[command(
    name = "gatewheel-tables",
    about = "Write the identity table, wheel sequence and reference data as JSON"
)]
struct Args {
    /// Which table to emit.
    #[arg(long, value_enum, default_value = "all")]
    section: Section,

    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Validate a table bundle instead of emitting one.
    #[arg(long, conflicts_with_all = ["section", "out"])]
    check: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

fn emit(section: Section) -> Value {
    let tables = RootTables::canonical();
    match section {
        Section::All => json::to_json(tables),
        Section::Identity => json::identity_table(tables),
        Section::Sequence => json::wheel_sequence(tables),
        Section::Connections => json::connections_document(tables),
        Section::Partition => json::partition_document(tables),
    }
}

/// One `[PASS]`/`[FAIL]` line for a loaded table.
fn status_line<T, E: std::fmt::Display>(
    table: &str,
    outcome: &std::result::Result<T, E>,
    summary: &str,
) -> String {
    match outcome {
        Ok(_) => format!("[PASS] {table}: {summary}"),
        Err(e) => format!("[FAIL] {table}: {e}"),
    }
}

/// Runs both loaders; returns the number of rejected tables.
fn check(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let bundle: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    let identity: BTreeMap<String, String> =
        serde_json::from_value(bundle["identity"].clone())
            .context("`identity` must be an object of gate number to binary string")?;
    let identity = IdentityTable::from_map(&identity);
    println!("{}", status_line("identity", &identity, "64 distinct binaries"));

    let sequence: Vec<i64> = serde_json::from_value(bundle["wheelSequence"].clone())
        .context("`wheelSequence` must be an array of integers")?;
    let sequence = WheelSequence::new(&sequence);
    println!(
        "{}",
        status_line("wheelSequence", &sequence, "permutation of 1..=64")
    );

    Ok(usize::from(identity.is_err()) + usize::from(sequence.is_err()))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if let Some(path) = &args.check {
        let failed = check(path)?;
        if failed > 0 {
            eprintln!("Table check FAILED: {failed} table(s) rejected.");
            process::exit(1);
        }
        println!("Table check PASSED.");
        return Ok(());
    }

    let text = serde_json::to_string_pretty(&emit(args.section))?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, text + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "tables written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_are_plain() {
        let ok: std::result::Result<(), String> = Ok(());
        let err: std::result::Result<(), String> = Err("gate 3 appears more than once".into());
        assert_eq!(
            status_line("identity", &ok, "64 distinct binaries"),
            "[PASS] identity: 64 distinct binaries"
        );
        assert_eq!(
            status_line("identity", &err, "64 distinct binaries"),
            "[FAIL] identity: gate 3 appears more than once"
        );
    }

    #[test]
    fn canonical_bundle_passes_both_loaders() {
        let bundle = emit(Section::All);
        let identity: BTreeMap<String, String> =
            serde_json::from_value(bundle["identity"].clone()).unwrap();
        let sequence: Vec<i64> = serde_json::from_value(bundle["wheelSequence"].clone()).unwrap();
        assert!(IdentityTable::from_map(&identity).is_ok());
        assert!(WheelSequence::new(&sequence).is_ok());
    }
}
