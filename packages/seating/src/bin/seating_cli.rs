//! CLI for inspecting and scripting bus seating layouts
//!
//! Reads and writes the same JSON the back-office exchanges with the engine,
//! so layouts can be replayed and checked outside the form screen.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seating::{BusRecord, LayoutCommand, LayoutEditor, SeatingConfig, MAX_DIMENSION};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seating_cli")]
#[command(about = "Bus seating-layout tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an empty single-deck layout record
    New {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
        rows: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
        columns: Option<u32>,
    },

    /// Replay a JSON command script against a layout record
    Apply { layout: PathBuf, commands: PathBuf },

    /// Print seat, aisle and space counts for a layout record
    Summary { layout: PathBuf },

    /// Print the submission payload for a layout record
    Payload { layout: PathBuf },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,seating=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SeatingConfig::from_env().context("Failed to load configuration")?;
    let mut defaults = config.deck_defaults();

    match cli.command {
        Commands::New { rows, columns } => {
            if let Some(rows) = rows {
                defaults.row_count = rows;
            }
            if let Some(columns) = columns {
                defaults.column_count = columns;
            }
            let editor = LayoutEditor::create(defaults);
            print_json(&editor.record())
        }
        Commands::Apply { layout, commands } => {
            let mut editor = LayoutEditor::load(read_record(&layout)?, defaults)
                .context("Failed to load layout")?;
            let script = fs::read_to_string(&commands)
                .with_context(|| format!("Failed to read {}", commands.display()))?;
            let script: Vec<LayoutCommand> =
                serde_json::from_str(&script).context("Invalid command script")?;

            let changed = editor.apply_all(&script);
            tracing::info!(
                commands = script.len(),
                changed,
                revision = editor.revision().0,
                "command script applied"
            );
            print_json(&editor.record())
        }
        Commands::Summary { layout } => {
            let editor = LayoutEditor::load(read_record(&layout)?, defaults)
                .context("Failed to load layout")?;
            let summary = editor.summary();
            for deck in &summary.decks {
                if !deck.duplicate_seat_numbers.is_empty() {
                    tracing::warn!(
                        deck = deck.deck_number,
                        numbers = ?deck.duplicate_seat_numbers,
                        "duplicate seat numbers"
                    );
                }
            }
            print_json(&summary)
        }
        Commands::Payload { layout } => {
            let editor = LayoutEditor::load(read_record(&layout)?, defaults)
                .context("Failed to load layout")?;
            print_json(&editor.payload())
        }
    }
}

fn read_record(path: &Path) -> Result<BusRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    BusRecord::from_json(&json).with_context(|| format!("Invalid layout record {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
