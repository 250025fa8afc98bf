//! Data source for month-view calendar grids.
//!
//! Features:
//! - Leading blank cells for any week start (Sunday = 0 .. Saturday = 6)
//! - Month length with leap years delegated to chrono
//! - Narrow localized weekday labels, rotated to the week start
//! - Explicit date normalization for out-of-range months and days

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod types;

pub use calendar::{calculate_blank_days, calculate_month_days, normalize_date};
pub use error::{Error, FormattingError, InvalidRangeError};
pub use formatter::{ChronoWeekdayNames, WeekdayNames, generate_week_days, generate_week_days_with};
pub use types::{LocaleConfig, MonthSpec, WeekConfig};
