// Entry point and high-level CLI flow.
//
// - `report <STATE>` loads the domain datasets, prints every panel of the
//   state's report card and exports it as CSV and JSON.
// - `metrics` and `states` list the metric catalog and the state table.
use clap::{Args, Parser, Subcommand};
use state_report::catalog::METRIC_DEFS;
use state_report::config::AppConfig;
use state_report::error::AppError;
use state_report::loader::{self, LoadReport};
use state_report::output;
use state_report::reports::ReportBuilder;
use state_report::states::{is_union_territory, STATES};
use state_report::telemetry;
use state_report::types::{AllDomainData, CatalogRow, StateRow};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "state_report",
    about = "Rank Indian states and union territories across public-data domains",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build, preview and export the report card of one state
    Report(ReportArgs),
    /// List the metric catalog
    Metrics,
    /// List the known state and union territory codes
    States,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Two-letter state/UT code (case-insensitive), e.g. MH
    state: String,
    /// Directory holding the per-domain JSON files
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Single JSON file holding every dataset under its camelCase key
    #[arg(long, conflicts_with = "data_dir")]
    bundle: Option<PathBuf>,
    /// Directory the CSV and JSON exports are written to
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Only print the report, do not write files
    #[arg(long)]
    no_export: bool,
}

fn print_load_report(report: &LoadReport) {
    println!(
        "Loading datasets... ({} of {} loaded)",
        report.loaded.len(),
        report.total()
    );
    if !report.missing.is_empty() {
        println!("Note: not present: {}", report.missing.join(", "));
    }
    for (dataset, reason) in &report.failed {
        println!("Warning: {} skipped ({})", dataset, reason);
    }
    println!();
}

fn handle_report(config: &AppConfig, args: ReportArgs) -> Result<(), AppError> {
    let data: AllDomainData = match &args.bundle {
        Some(path) => loader::load_bundle(path)?,
        None => {
            let dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
            let (data, load_report) = loader::load_domain_data(&dir);
            print_load_report(&load_report);
            data
        }
    };

    let builder = ReportBuilder::standard();
    let card = builder.build(&args.state, &data);
    let summary = card.summary();

    println!("{} ({})", card.state.name, card.state.id);
    println!("Data across {} domains\n", summary.domains_with_data);
    for panel in &card.panels {
        output::preview_panel(panel, config.preview_rows);
    }
    println!(
        "Summary: {} metrics with data, {} in top 25%, {} in bottom 25%\n",
        summary.metrics_with_data, summary.top_quartile, summary.bottom_quartile
    );

    if args.no_export {
        return Ok(());
    }

    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir.clone());
    std::fs::create_dir_all(&out_dir)?;
    let stem = format!("{}_report_card", card.state.id.to_lowercase());

    let csv_path = out_dir.join(format!("{stem}.csv"));
    output::write_csv(&csv_path, &output::report_rows(&card))?;

    let json_path = out_dir.join(format!("{stem}.json"));
    let today = chrono::Local::now().date_naive();
    output::write_json(&json_path, &output::report_document(&card, today))?;

    info!(csv = %csv_path.display(), json = %json_path.display(), "report card exported");
    println!("(Full report exported to {} and {})", csv_path.display(), json_path.display());
    Ok(())
}

fn handle_metrics() {
    let rows: Vec<CatalogRow> = METRIC_DEFS
        .iter()
        .map(|d| CatalogRow {
            key: d.key.to_string(),
            label: d.label.to_string(),
            unit: d.unit.symbol().to_string(),
            direction: if d.higher_is_better { "higher is better" } else { "lower is better" }
                .to_string(),
            domain: d.domain.to_string(),
        })
        .collect();
    output::preview_table_rows(&rows, rows.len());
}

fn handle_states() {
    let rows: Vec<StateRow> = STATES
        .iter()
        .map(|(code, name)| StateRow {
            code: code.to_string(),
            name: name.to_string(),
            kind: if is_union_territory(code) { "UT" } else { "State" }.to_string(),
        })
        .collect();
    output::preview_table_rows(&rows, rows.len());
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Report(args) => handle_report(&config, args),
        Command::Metrics => {
            handle_metrics();
            Ok(())
        }
        Command::States => {
            handle_states();
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        error!(%err, "state_report failed");
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
