use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use planning_agenda::WeekStart;

/// CLI arguments for planning-agenda
#[derive(Parser)]
#[command(name = "planning-agenda")]
#[command(about = "Select and group planning items by calendar day")]
#[command(version)]
pub struct Cli {
    /// JSON file with an array of planning items (stdin if not specified)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Agenda mode: day, week
    #[arg(long, default_value = "day", value_parser = ["day", "week"])]
    pub agenda: String,

    /// Day to show in 'day' mode, or any day of the week in 'week' mode (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Start date for 'week' mode (YYYY-MM-DD format)
    #[arg(long, value_parser = parse_date, requires = "to", conflicts_with = "date")]
    pub from: Option<NaiveDate>,

    /// End date for 'week' mode (YYYY-MM-DD format)
    #[arg(long, value_parser = parse_date, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Timezone for day boundaries (IANA name like "Europe/Moscow", or an offset like "+03:00")
    #[arg(long, default_value = "UTC")]
    pub tz: String,

    /// First day of the week in 'week' mode
    #[arg(long, default_value = "monday")]
    pub week_start: WeekStart,

    /// Fail on the first item with an invalid timestamp instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Reject range arguments outside 'week' mode
    pub fn check_mode_args(&self) -> Result<(), String> {
        if self.agenda == "day" && (self.from.is_some() || self.to.is_some()) {
            return Err("--from/--to apply to 'week' mode only; use --date for 'day' mode".to_string());
        }
        Ok(())
    }
}

/// Parse a date in YYYY-MM-DD format
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}': {e}. Use YYYY-MM-DD format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-10").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(parse_date("10.03.2024").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["planning-agenda"]).unwrap();
        assert_eq!(cli.agenda, "day");
        assert_eq!(cli.tz, "UTC");
        assert_eq!(cli.week_start.weekday(), Weekday::Mon);
        assert!(!cli.strict);
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_cli_week_range_requires_both_bounds() {
        assert!(Cli::try_parse_from(["planning-agenda", "--agenda", "week", "--from", "2024-03-10"]).is_err());
        let cli = Cli::try_parse_from([
            "planning-agenda",
            "--agenda",
            "week",
            "--from",
            "2024-03-10",
            "--to",
            "2024-03-12",
            "--week-start",
            "sun",
        ])
        .unwrap();
        assert_eq!(cli.from, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(cli.week_start.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_cli_range_conflicts_with_date() {
        let parsed = Cli::try_parse_from([
            "planning-agenda",
            "--agenda",
            "week",
            "--date",
            "2024-03-13",
            "--from",
            "2024-03-10",
            "--to",
            "2024-03-12",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_check_mode_args_rejects_range_in_day_mode() {
        let cli = Cli::try_parse_from(["planning-agenda", "--from", "2024-03-10", "--to", "2024-03-12"]).unwrap();
        assert!(cli.check_mode_args().is_err());

        let cli = Cli::try_parse_from(["planning-agenda", "--agenda", "week", "--from", "2024-03-10", "--to", "2024-03-12"])
            .unwrap();
        assert!(cli.check_mode_args().is_ok());

        let cli = Cli::try_parse_from(["planning-agenda", "--date", "2024-03-10"]).unwrap();
        assert!(cli.check_mode_args().is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["planning-agenda", "--agenda", "tasks"]).is_err());
    }
}
