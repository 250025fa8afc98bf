//! Value types and constants shared by the grid calculations and the CLI.

/// Number of columns in a month grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// Highest zero-based month index (December).
pub const MAX_MONTH_INDEX: u32 = 11;

/// Locale used when the caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// The month being queried. `month` is zero-indexed (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpec {
    pub year: i32,
    pub month: u32,
}

impl MonthSpec {
    pub fn new(year: i32, month: u32) -> Self {
        MonthSpec { year, month }
    }
}

/// Which day of the week (Sunday = 0) the first grid column represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekConfig {
    pub week_start: u32,
}

impl WeekConfig {
    pub fn new(week_start: u32) -> Self {
        WeekConfig { week_start }
    }
}

/// Label language (BCP-47 tag) and column rotation for weekday headers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleConfig {
    pub locale: String,
    pub week_start: u32,
}

impl LocaleConfig {
    pub fn new(locale: impl Into<String>, week_start: u32) -> Self {
        LocaleConfig {
            locale: locale.into(),
            week_start,
        }
    }

    pub fn week(&self) -> WeekConfig {
        WeekConfig::new(self.week_start)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        LocaleConfig::new(DEFAULT_LOCALE, 0)
    }
}

/// Display options for the `monthgrid` binary.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// BCP-47 tag used for month and weekday names.
    pub locale: String,
    /// First grid column (Sunday = 0).
    pub week_start: u32,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting and week anchoring.
    pub today: chrono::NaiveDate,
    /// Print raw values instead of the grid.
    pub summary: bool,
}

impl GridContext {
    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::new(self.locale.clone(), self.week_start)
    }
}

// Width of one day cell, without the separating space
pub const CELL_WIDTH: usize = 2;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
