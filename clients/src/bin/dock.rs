//! `gatewheel-dock`: Prints the docking coordinates of a gate line.
//!
//! **Usage:**
//! ```text
//! gatewheel-dock <GATE> [LINE] [--offset <DEG> | --north <INDEX> | --straddle <A>,<B>]
//!                [--progression <TOKEN>] [--sequence <FILE>] [--json]
//! gatewheel-dock --all [--json]
//! ```
//!
//! Without a line, all six lines of the gate are printed. `--all` prints
//! all 384 positions in wheel order.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gatewheel::{
    CardinalProgression, DockingData, DockingTable, Gate, IdentityTable, Line, NorthPosition,
    Positioning, RotationSense, WheelConfiguration, WheelOptions,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Query gate-wheel docking coordinates.
#[derive(Parser)]
#[command(
    name = "gatewheel-dock",
    about = "Print wheel position, angles and symbolic derivations for a gate line"
)]
struct Args {
    /// Gate number (1-64).
    gate: Option<i64>,

    /// Line number (1-6); every line when omitted.
    line: Option<i64>,

    /// Print every gate line in wheel order.
    #[arg(long, conflicts_with_all = ["gate", "line"])]
    all: bool,

    /// Rotation offset in degrees.
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<f64>,

    /// Wheel index aligned to north.
    #[arg(long, conflicts_with = "straddle")]
    north: Option<usize>,

    /// Two adjacent wheel indices whose boundary is aligned to north.
    #[arg(long, value_delimiter = ',', num_args = 2)]
    straddle: Option<Vec<usize>>,

    /// Compass directions at 0°, 90°, 180° and 270° (e.g. NESW).
    #[arg(long, default_value_t = CardinalProgression::default())]
    progression: CardinalProgression,

    /// JSON array of 64 gate numbers replacing the default sequence.
    #[arg(long)]
    sequence: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

fn wheel_options(args: &Args) -> Result<WheelOptions> {
    let north_position = match (&args.straddle, args.north) {
        (Some(pair), _) => match pair.as_slice() {
            [a, b] => Some(NorthPosition::Straddle(*a, *b)),
            _ => bail!("--straddle takes exactly two indices"),
        },
        (None, Some(index)) => Some(NorthPosition::Index(index)),
        (None, None) => None,
    };
    let custom_sequence = match &args.sequence {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let gates: Vec<i64> = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {} as a JSON array", path.display()))?;
            Some(gates)
        }
        None => None,
    };
    Ok(WheelOptions {
        cardinal_progression: args.progression,
        rotation_offset: args.offset,
        north_position,
        custom_sequence,
    })
}

fn print_record(data: &DockingData) {
    println!(
        "{:>2}.{}  {}  {}  idx {:>2}  pos {:>3}  base {:>8.4}°  visual {:>8.4}°  {:<12} {:<20} {}/{}  opp {:>2}  {:?}",
        data.gate.number(),
        data.line.number(),
        data.binary,
        data.codon,
        data.wheel_index,
        data.line_position,
        data.base_angle,
        data.visual_angle,
        data.quarter.name(),
        data.face.name(),
        data.trigrams.lower,
        data.trigrams.upper,
        data.opposite_gate.number(),
        data.polarity,
    );
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let identity = IdentityTable::canonical()?;
    let wheel = WheelConfiguration::new(wheel_options(&args)?)?;
    let positioning = Positioning::new(identity, &wheel);
    tracing::info!(
        config = %wheel.config_id(),
        offset = wheel.rotation_offset(),
        progression = %wheel.cardinal_progression(),
        "wheel configured"
    );

    let records: Vec<DockingData> = if args.all {
        let table = DockingTable::build(&positioning)?;
        table.in_wheel_order().into_iter().copied().collect()
    } else {
        let Some(gate) = args.gate else {
            bail!("a gate number or --all is required");
        };
        let gate = Gate::new(gate)?;
        match args.line {
            Some(line) => vec![positioning.docking_data(gate, Line::new(line)?)?],
            None => Line::ALL
                .into_iter()
                .map(|line| positioning.docking_data(gate, line))
                .collect::<gatewheel::Result<_>>()?,
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "Wheel {}  offset {:.4}°  {}  clock-face {:?}",
        wheel.config_id(),
        wheel.rotation_offset(),
        wheel.cardinal_progression(),
        wheel.turn(RotationSense::ClockFace),
    );
    for data in &records {
        print_record(data);
    }
    Ok(())
}
