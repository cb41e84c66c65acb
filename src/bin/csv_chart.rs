//! `csv-chart`: load a CSV file and print the chart payload for one column selection as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use csv_chart_shaper::chart::{ChartKind, ChartSelection, RenderOptions};
use csv_chart_shaper::ingestion::{IngestionOptions, TracingObserver, ingest_from_path};
use csv_chart_shaper::processing::CoercionPolicy;
use csv_chart_shaper::session::ChartSession;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shape a CSV file into a chart payload", long_about = None)]
struct Cli {
    /// CSV file to load
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Chart kind (scatter, barchart, linechart, histogram, heatmap, bubble, pie, radar, area, treemap, waterfall)
    #[arg(short, long, default_value = "scatter")]
    kind: ChartKind,

    /// X column (defaults to the first column)
    #[arg(short = 'x', long)]
    x: Option<String>,

    /// Y column (defaults to the first column)
    #[arg(short = 'y', long)]
    y: Option<String>,

    /// Radius column for bubble charts (defaults to the first column)
    #[arg(short = 'r', long = "radius")]
    r: Option<String>,

    /// Leave the y column unset (pie, radar, treemap and waterfall then count rows)
    #[arg(long, conflicts_with = "y")]
    no_y: bool,

    /// Numeric coercion policy: strict or prefix (overrides the config file)
    #[arg(long)]
    coercion: Option<CoercionPolicy>,

    /// JSON file with render options (width, height, font_size, palette, ...)
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => RenderOptions::default(),
    };
    if let Some(policy) = cli.coercion {
        options.coercion = policy;
    }

    let ingest_opts = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };
    let dataset = ingest_from_path(&cli.input, &ingest_opts)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let mut session = ChartSession::new(options);
    session.set_kind(cli.kind);
    session.load(dataset);
    let sel = selection(&cli, session.selection());
    session.set_selection(sel);

    let Some(payload) = session.render() else {
        tracing::warn!(kind = %cli.kind, "nothing to render: the file has no rows or the column selection is incomplete");
        return Ok(());
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

/// Apply the column flags on top of the session's first-column defaults.
fn selection(cli: &Cli, defaults: &ChartSelection) -> ChartSelection {
    let mut sel = defaults.clone();
    if let Some(x) = &cli.x {
        sel = sel.with_x(x.as_str());
    }
    if cli.no_y {
        sel.y = None;
    } else if let Some(y) = &cli.y {
        sel = sel.with_y(y.as_str());
    }
    if let Some(r) = &cli.r {
        sel = sel.with_r(r.as_str());
    }
    sel
}

fn load_options(path: &Path) -> Result<RenderOptions> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid render options in {}", path.display()))
}
