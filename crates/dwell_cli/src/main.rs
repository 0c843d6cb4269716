//! Dwell CLI
//!
//! Replay recorded pointer traces through a gesture panel and inspect panel
//! files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod replay;
mod trace;

use config::PanelConfig;

#[derive(Parser)]
#[command(name = "dwell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dwell-to-press gesture panel tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a recorded pointer trace through a panel and report presses
    Replay {
        /// JSON-lines trace file
        trace: PathBuf,

        /// Panel file (defaults to the demo panel)
        #[arg(short, long)]
        panel: Option<PathBuf>,

        /// Print each press as a JSON line on stdout
        #[arg(long)]
        json: bool,
    },

    /// Load and lay out a panel, then print every widget's rectangle
    Check {
        /// Panel file (defaults to the demo panel)
        #[arg(short, long)]
        panel: Option<PathBuf>,
    },

    /// Print the demo panel as TOML
    Panel,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay { trace, panel, json } => cmd_replay(&trace, panel.as_deref(), json),
        Commands::Check { panel } => cmd_check(panel.as_deref()),
        Commands::Panel => cmd_panel(),
    }
}

fn cmd_replay(trace_path: &Path, panel: Option<&Path>, json: bool) -> Result<()> {
    let panel = PanelConfig::load_or_default(panel)?;
    let mut dispatcher = panel.build()?;

    let file = File::open(trace_path)
        .with_context(|| format!("Failed to open {}", trace_path.display()))?;
    let samples = trace::read_trace(BufReader::new(file))
        .with_context(|| format!("Failed to read trace {}", trace_path.display()))?;

    info!(
        "Replaying {} samples through {} widgets",
        samples.len(),
        dispatcher.len()
    );

    if json {
        dispatcher.set_announce(replay::json_lines(io::stdout()));
    }

    let summary = replay::replay(&mut dispatcher, &samples)?;
    info!(
        "Replay finished: {} samples, {} presses, tracking started {} times, {} refocus requests",
        summary.samples,
        summary.presses.len(),
        summary.tracking_started,
        summary.refocus_requests
    );
    Ok(())
}

fn cmd_check(panel: Option<&Path>) -> Result<()> {
    let config = PanelConfig::load_or_default(panel)?;
    let dispatcher = config.build()?;

    info!(
        "Panel OK: {} widgets on a {}x{} screen",
        dispatcher.len(),
        config.screen.width,
        config.screen.height
    );

    let rects = dispatcher.rects().unwrap_or_default();
    for (widget, rect) in dispatcher.widgets().iter().zip(rects) {
        println!(
            "{:<12} {:<7} x={:.1} y={:.1} w={:.1} h={:.1}",
            widget.name(),
            widget.kind().as_str(),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }

    Ok(())
}

fn cmd_panel() -> Result<()> {
    print!("{}", PanelConfig::default().to_toml()?);
    Ok(())
}
