mod cli;

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use planning_agenda::report::{DayReport, WeekReport};
use planning_agenda::{
    compute_day_window, date_range, filter_by_window, group_by_day, week_dates, AgendaConfig, PlanningItem,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    cli.check_mode_args()?;
    let config = AgendaConfig::from_parts(&cli.tz, cli.week_start, cli.strict)?;
    let options = config.filter_options();
    let items = read_items(cli.input.as_deref())?;
    tracing::debug!(items = items.len(), zone = %config.zone, "loaded planning items");

    let output = match cli.agenda.as_str() {
        "day" => {
            let date = cli.date.unwrap_or_else(|| config.zone.today());
            let window = compute_day_window(date, &config.zone)?;
            let filtered = filter_by_window(&items, &window, &options)?;
            serde_json::to_string_pretty(&DayReport::new(&window, filtered))?
        }
        "week" => {
            let dates = if let (Some(from), Some(to)) = (cli.from, cli.to) {
                date_range(from, to)?
            } else {
                let reference = cli.date.unwrap_or_else(|| config.zone.today());
                week_dates(reference, config.week_start)?
            };
            let grouped = group_by_day(&items, &dates, &config.zone, &options)?;
            serde_json::to_string_pretty(&WeekReport::from(grouped))?
        }
        _ => return Err("Invalid agenda mode. Use: day, week".into()),
    };

    if let Some(out_path) = cli.output {
        fs::write(out_path, output)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only JSON
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_items(input: Option<&Path>) -> Result<Vec<PlanningItem>, Box<dyn std::error::Error>> {
    let content = match input {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    Ok(serde_json::from_str(&content)?)
}
