//! Command-line argument parsing using clap.
//!
//! Arguments follow the cal convention: `[month] [year]`, with the month
//! given as 1-12 or an English name.

use chrono::Datelike;
use clap::{ArgAction, Parser, ValueHint};
use std::io::IsTerminal;

use crate::types::{DEFAULT_LOCALE, GridContext, MonthSpec};

#[derive(Parser, Debug)]
#[command(name = "monthgrid")]
#[command(about = "Displays the grid data for a calendar month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// First grid column as a weekday index (0 = Sunday .. 6 = Saturday).
    #[arg(
        short = 'w',
        long,
        help_heading = "Calendar options",
        value_name = "index",
        conflicts_with_all = ["sunday", "monday"]
    )]
    pub week_start: Option<u32>,

    /// Locale for month and weekday names (BCP-47 tag, e.g. en-US).
    #[arg(short = 'l', long, help_heading = "Calendar options", value_name = "tag")]
    pub locale: Option<String>,

    /// Print blank days, month length and weekday labels instead of the grid.
    #[arg(long, help_heading = "Output options")]
    pub summary: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Month (1-12 or name) - optional.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999) - optional, used with month.
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display the grid of a calendar month.

Without any arguments, display the current month.

Examples:
  monthgrid                   Display current month
  monthgrid 2 2024            Display February 2024
  monthgrid feb               Display February of the current year
  monthgrid -m 2 2024         Monday as the first column
  monthgrid -l de-DE 3 2024   German month and weekday names
  monthgrid --summary 2 2024  Print the raw grid values";

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "MONTHGRID_TEST_TIME";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Effective week start from `-s`, `-m` or `--week-start`.
    pub fn effective_week_start(&self) -> u32 {
        match (self.week_start, self.monday) {
            (Some(week_start), _) => week_start,
            (None, true) => 1,
            (None, false) => 0,
        }
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let today = get_today_date();

        let color = !args.no_color && std::io::stdout().is_terminal();

        if args.sunday && args.monday {
            return Err("Options -s and -m are mutually exclusive".to_string());
        }

        let locale = args.locale.clone().unwrap_or_else(get_system_locale);

        Ok(GridContext {
            locale,
            week_start: args.effective_week_start(),
            color,
            today,
            summary: args.summary,
        })
    }
}

/// Get today's date, respecting MONTHGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en-US) as a BCP-47 tag.
pub fn get_system_locale() -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
        .as_deref()
        .and_then(posix_to_bcp47)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Convert `de_DE.UTF-8@euro` into `de-DE`. `C` and `POSIX` have no tag.
fn posix_to_bcp47(value: &str) -> Option<String> {
    let name = value.split('.').next()?.split('@').next()?;
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Some(name.replace('_', "-"))
}

/// Parse month from string (numeric 1-12 or English name) into a zero-based index.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n - 1);
    }

    const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower)))
        .map(|index| index as u32)
}

/// Calculate the displayed month from positional arguments.
///
/// Argument patterns:
/// - 0 args: current month
/// - 1 arg: month of the current year
/// - 2 args: month year
pub fn get_display_month(args: &Args) -> Result<MonthSpec, String> {
    let today = get_today_date();

    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => Ok(MonthSpec::new(today.year(), today.month0())),
        (Some(month), None) => {
            let month = parse_month(month).ok_or_else(|| format!("Invalid month: {}", month))?;
            Ok(MonthSpec::new(today.year(), month))
        }
        (Some(month), Some(year)) => {
            let month = parse_month(month).ok_or_else(|| format!("Invalid month: {}", month))?;
            let year = year
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year: {} (must be 1-9999)", year));
            }
            Ok(MonthSpec::new(year, month))
        }
        (None, Some(_)) => Err("Invalid argument combination".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_locale_names_become_tags() {
        assert_eq!(posix_to_bcp47("de_DE.UTF-8"), Some("de-DE".to_string()));
        assert_eq!(posix_to_bcp47("sr_RS@latin"), Some("sr-RS".to_string()));
        assert_eq!(posix_to_bcp47("C.UTF-8"), None);
        assert_eq!(posix_to_bcp47("POSIX"), None);
        assert_eq!(posix_to_bcp47(""), None);
    }

    #[test]
    fn week_start_flags() {
        let args = Args::parse_from(["monthgrid"]);
        assert_eq!(args.effective_week_start(), 0);

        let args = Args::parse_from(["monthgrid", "-m"]);
        assert_eq!(args.effective_week_start(), 1);

        let args = Args::parse_from(["monthgrid", "-w", "6"]);
        assert_eq!(args.effective_week_start(), 6);
    }

    #[test]
    fn week_start_conflicts_with_shortcuts() {
        assert!(Args::try_parse_from(["monthgrid", "-m", "-w", "3"]).is_err());
    }
}
