//! Headless dataset checker.
//!
//! Loads a dataset file and prints the same aggregations the dashboard
//! renders, so a data file can be sanity-checked without serving the UI.
//! Exits non-zero when the dataset cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use launchboard_core::dataset::{load_dataset, LaunchDataset};
use launchboard_core::{DashboardQuery, DashboardSettings, Dispatcher, LoadError, WidgetEvent};
use launchboard_types::formatting::{format_mass, format_percent};
use launchboard_types::{ChartSpec, ChartUpdate, PayloadRange, ALL_SITES};

#[derive(Parser)]
#[command(version, about = "Headless checker for Launchboard datasets")]
struct Cli {
    /// Dataset file; defaults to the configured path.
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-site success/failure table plus the all-sites pie slices.
    Summary,
    /// Print the pie chart spec for one site (or ALL).
    Pie {
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Emit the spec as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the scatter chart spec for a site and payload interval.
    Scatter {
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Lower payload bound in kg; defaults to the dataset minimum.
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg; defaults to the dataset maximum.
        #[arg(long)]
        high: Option<f64>,
        /// Emit the spec as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "dataset validation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LoadError> {
    let settings = DashboardSettings::load();
    let path = cli.data.unwrap_or_else(|| settings.dataset_path.clone());
    let dataset = load_dataset(&path)?;

    tracing::info!(
        rows = dataset.len(),
        sites = dataset.sites().len(),
        path = %path.display(),
        "dataset loaded"
    );

    match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => print_summary(&dataset, &settings),
        Commands::Pie { site, json } => {
            let spec = DashboardQuery::new(&dataset).success_ratio_spec(&site);
            print_spec(&spec, json);
        }
        Commands::Scatter { site, low, high, json } => {
            let bounds = dataset.payload_bounds();
            let range = PayloadRange::new(low.unwrap_or(bounds.low), high.unwrap_or(bounds.high));

            // Replay the selection through the dispatcher, exactly as the
            // hosting runtime would.
            let mut dispatcher = Dispatcher::new(&dataset);
            let mut updates: Vec<ChartUpdate> = Vec::new();
            dispatcher.dispatch(WidgetEvent::SiteSelected(site), &mut updates);
            updates.clear();
            dispatcher.dispatch(WidgetEvent::PayloadRangeChanged(range), &mut updates);

            for update in &updates {
                print_spec(&update.spec, json);
            }
        }
    }

    Ok(())
}

fn print_summary(dataset: &LaunchDataset, settings: &DashboardSettings) {
    let eu = settings.european_numbers;
    let bounds = dataset.payload_bounds();
    let query = DashboardQuery::new(dataset);

    println!(
        "{} rows across {} sites, payload {} to {} kg",
        dataset.len(),
        dataset.sites().len(),
        format_mass(bounds.low, eu),
        format_mass(bounds.high, eu),
    );
    println!();
    println!(
        "{:<28} {:>9} {:>8} {:>8} {:>7}",
        "site", "launches", "success", "failure", "rate"
    );

    for site in dataset.sites() {
        let pie = query.success_ratio(site);
        let success = pie.slices[0].value;
        let failure = pie.slices[1].value;
        let total = success + failure;
        let rate = if total > 0 {
            success as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        println!(
            "{:<28} {:>9} {:>8} {:>8} {:>7}",
            site,
            total,
            success,
            failure,
            format_percent(rate, eu),
        );
    }

    println!();
    let all = query.success_ratio(ALL_SITES);
    println!("{}:", all.title);
    for slice in &all.slices {
        println!("  {:<28} {:>6}", slice.label, slice.value);
    }
}

fn print_spec(spec: &ChartSpec, json: bool) {
    if json {
        match serde_json::to_string_pretty(spec) {
            Ok(out) => println!("{out}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize chart spec"),
        }
        return;
    }

    match spec {
        ChartSpec::Pie(pie) => {
            println!("{}:", pie.title);
            for slice in &pie.slices {
                println!("  {:<28} {:>6}", slice.label, slice.value);
            }
        }
        ChartSpec::Scatter(scatter) => {
            println!("{} ({} points):", scatter.title, scatter.points.len());
            println!("  {:<12} {}", scatter.x_label, scatter.y_label);
            for point in &scatter.points {
                println!("  {:<12} {}", point.payload_mass_kg, point.outcome);
            }
        }
    }
}
