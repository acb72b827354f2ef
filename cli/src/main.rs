mod chart;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use timetally_core::{
    build_report, EntrySource, FileEntrySource, HttpEntrySource, Palette,
};

#[derive(Parser)]
#[command(name = "timetally")]
#[command(about = "Aggregate time-tracking entries into per-employee totals", long_about = None)]
struct Cli {
    /// Endpoint serving the JSON entry array
    #[arg(long, env = "SOURCE_URL", global = true)]
    url: Option<String>,

    /// Local JSON file with the entry array (offline runs)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the aggregated totals as a table with a colored breakdown
    Report,
    /// Full-screen terminal chart of the breakdown (q to quit)
    Chart,
    /// Emit the full report as pretty JSON
    Json,
}

fn resolve_source(cli: &Cli) -> Result<Box<dyn EntrySource>> {
    match (&cli.url, &cli.file) {
        (Some(_), Some(_)) => bail!("Pass either --url or --file, not both"),
        (Some(url), None) => Ok(Box::new(HttpEntrySource::new(url.clone()))),
        (None, Some(path)) => Ok(Box::new(FileEntrySource::new(path.clone()))),
        (None, None) => {
            bail!("No entry source: pass --url (or set SOURCE_URL) or --file")
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = resolve_source(&cli)?;
    let entries = source.fetch()?;

    let palette = Palette::default();
    let report = build_report(&entries, &palette);

    if report.skipped.any() {
        log::warn!(
            "Skipped {} entries (missing name: {}, soft-deleted: {}, bad timestamps: {})",
            report.skipped.total(),
            report.skipped.missing_name,
            report.skipped.soft_deleted,
            report.skipped.bad_timestamps
        );
    }

    match cli.command {
        Some(Commands::Chart) => chart::run(&report, &palette)?,
        Some(Commands::Json) => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(Commands::Report) | None => report::print_report(&report, &palette),
    }

    Ok(())
}
