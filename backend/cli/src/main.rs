mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ctxprobe_capture::{capture_at, ContextRecord};
use ctxprobe_core::PointerPosition;
use ctxprobe_snapshot::PageSnapshot;

use config::Config;

#[derive(Parser)]
#[command(name = "ctxprobe")]
#[command(about = "ctxprobe — element-context capture over page snapshots")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture the element context at a pointer position
    Probe {
        /// Path to the page snapshot JSON
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Pointer x coordinate
        #[arg(short)]
        x: i32,
        /// Pointer y coordinate
        #[arg(short)]
        y: i32,
        /// Print the record as pretty JSON instead of the wire string
        #[arg(long)]
        json: bool,
    },
    /// Decode a #ZVSP#-delimited capture string into a structured record
    Decode {
        /// The capture string to decode
        wire: String,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env();

    // Diagnostics go to stderr so stdout carries only the capture output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Probe {
            snapshot,
            x,
            y,
            json,
        } => {
            let page = PageSnapshot::load(&snapshot)?;
            let pointer = PointerPosition::new(x, y);
            let record = capture_at(&page, pointer)
                .with_context(|| format!("Capture failed at {pointer}"))?;
            info!(tag = %record.tag_kind, "Capture complete");
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record.to_wire());
            }
        }
        Commands::Decode { wire } => {
            let record = ContextRecord::from_wire(&wire).context("Malformed capture string")?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
