//! Corporate web simulation - main binary
//!
//! Runs one processing pass over the persisted asset table: bootstrap an
//! empty table, merge valuations from an optional ledger snapshot, run the
//! configured reinvestment cycles, and overwrite the table. Prints the
//! revenue-snapshot totals afterwards.
//!
//! The binary also serves the click-tracking path of the monetization
//! surfaces via `--track-click`, which appends one row to the click log and
//! exits without touching the asset table.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simulation::{RecordingHook, Simulation, SimulationConfig, format_usd};
use storage::{AssetTable, ClickLog, ClickRecord, load_ledger_snapshot};
use tracing::error;

/// Corporate web simulation - asset ledger bootstrap, sync and reinvestment
#[derive(Parser, Debug)]
#[command(name = "corporate-web-sim")]
#[command(about = "Asset ledger simulation: bootstrap, valuation sync, reinvestment cycles")]
#[command(version)]
struct Args {
    /// Path to the asset table CSV
    #[arg(long, env = "CORPWEB_DATA_FILE", default_value = storage::DEFAULT_ASSET_FILE)]
    data_file: PathBuf,

    /// Path to the click log CSV
    #[arg(long, env = "CORPWEB_CLICK_LOG", default_value = storage::DEFAULT_CLICK_LOG)]
    click_log: PathBuf,

    /// Optional JSON ledger snapshot of {asset_id, amount_usd} records
    #[arg(long, env = "CORPWEB_LEDGER_FILE")]
    ledger_file: Option<PathBuf>,

    /// Reinvestment cycles per pass
    #[arg(long, env = "CORPWEB_CYCLES")]
    cycles: Option<u32>,

    /// Corp entities issuing assets (comma-separated or repeated)
    #[arg(long = "corp", env = "CORPWEB_CORPS", value_delimiter = ',')]
    corps: Vec<String>,

    /// Random seed for reproducible runs
    #[arg(long, env = "CORPWEB_SEED")]
    seed: Option<u64>,

    /// Record a click as `source,label,url` and exit
    #[arg(long, value_name = "SOURCE,LABEL,URL")]
    track_click: Option<String>,

    /// Print per-cycle growth after the pass
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(raw) = &args.track_click {
        return track_click(&args.click_log, raw);
    }

    let mut config = SimulationConfig::default();
    if !args.corps.is_empty() {
        config = config.with_corp_ids(args.corps.clone());
    }
    if let Some(cycles) = args.cycles {
        config = config.with_cycles(cycles);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let table = AssetTable::new(&args.data_file);
    let ledger = args
        .ledger_file
        .as_deref()
        .map(load_ledger_snapshot)
        .unwrap_or_default();

    let mut sim = Simulation::new(config);
    let recording = Arc::new(RecordingHook::new());
    if args.verbose {
        sim.add_hook(recording.clone());
    }

    let stats = match sim.run_pass(&table, &ledger) {
        Ok(stats) => stats,
        Err(err) => {
            error!(%err, "processing pass failed");
            return ExitCode::FAILURE;
        }
    };

    let metrics = sim.metrics();
    println!("Corporate Web - Assets & Revenue");
    println!("  Total Assets:                {}", metrics.total_assets);
    println!("  Total Reinvested:            {}", metrics.total_reinvested);
    println!(
        "  Total Transferable Revenue:  {}",
        format_usd(metrics.total_transferable)
    );
    if stats.bootstrapped > 0 {
        println!("  Bootstrapped:                {}", stats.bootstrapped);
    }
    if stats.ledger_matches > 0 {
        println!("  Ledger matches:              {}", stats.ledger_matches);
    }

    if args.verbose {
        println!("Cycle growth:");
        for cycle in recording.snapshots() {
            println!(
                "  cycle {}: {} parents spawned {} -> {} assets",
                cycle.cycle, cycle.parents, cycle.spawned, cycle.table_size
            );
        }
    }

    ExitCode::SUCCESS
}

/// Append one click to the log. The argument is `source,label,url`; the url
/// may itself contain commas, so only the first two are separators.
fn track_click(path: &PathBuf, raw: &str) -> ExitCode {
    let mut parts = raw.splitn(3, ',');
    let (Some(source), Some(label), Some(url)) = (parts.next(), parts.next(), parts.next()) else {
        error!(raw, "expected --track-click SOURCE,LABEL,URL");
        return ExitCode::FAILURE;
    };

    let log = ClickLog::new(path);
    if let Err(err) = log.append(&ClickRecord::now(source, label, url)) {
        error!(%err, path = %path.display(), "failed to record click");
        return ExitCode::FAILURE;
    }
    println!("Click recorded: {} / {}", source, label);
    ExitCode::SUCCESS
}
