//! Month grid arithmetic: leading blank cells, month length and date normalization.
//!
//! Weekday indices follow the civil convention (Sunday = 0). Months are
//! zero-indexed (January = 0). Leap years come from chrono's proleptic
//! Gregorian calendar and are never computed here.

use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::{debug, trace};

use crate::error::InvalidRangeError;
use crate::types::{DAYS_PER_WEEK, MAX_MONTH_INDEX, MonthSpec, WeekConfig};

const MONTHS_PER_YEAR: i64 = 12;

/// Reject month indices outside 0..=11.
pub fn validate_month(month: u32) -> Result<u32, InvalidRangeError> {
    if month > MAX_MONTH_INDEX {
        return Err(InvalidRangeError::Month { month });
    }
    Ok(month)
}

/// Reject week starts outside 0..=6.
pub fn validate_week_start(week_start: u32) -> Result<u32, InvalidRangeError> {
    if week_start >= DAYS_PER_WEEK {
        return Err(InvalidRangeError::WeekStart { week_start });
    }
    Ok(week_start)
}

/// Resolve an arbitrary (year, month, day) triple into a canonical date.
///
/// Month overflow and underflow carry into the year. `day` is then applied as
/// an offset from the 1st of the resulting month, so day 0 is the last day of
/// the previous month and negative days keep walking backwards.
///
/// ```
/// use chrono::NaiveDate;
/// use monthgrid::calendar::normalize_date;
///
/// // Day 0 of "month 12" is December 31st.
/// assert_eq!(normalize_date(2023, 12, 0), Ok(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
/// // Month -1 is December of the previous year.
/// assert_eq!(normalize_date(2024, -1, 1), Ok(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()));
/// ```
pub fn normalize_date(year: i32, month: i64, day: i64) -> Result<NaiveDate, InvalidRangeError> {
    let out_of_range = || InvalidRangeError::Date { year, month, day };

    let total_months = i64::from(year)
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|m| m.checked_add(month))
        .ok_or_else(out_of_range)?;
    let carried_year =
        i32::try_from(total_months.div_euclid(MONTHS_PER_YEAR)).map_err(|_| out_of_range())?;
    // rem_euclid keeps this in 0..12
    let month_index = total_months.rem_euclid(MONTHS_PER_YEAR) as u32;

    let first = NaiveDate::from_ymd_opt(carried_year, month_index + 1, 1).ok_or_else(out_of_range)?;
    let offset = day
        .checked_sub(1)
        .and_then(TimeDelta::try_days)
        .ok_or_else(out_of_range)?;
    let date = first.checked_add_signed(offset).ok_or_else(out_of_range)?;

    trace!(year, month, day, %date, "normalized date");
    Ok(date)
}

/// Civil weekday index (Sunday = 0) of the 1st of the month.
pub fn first_weekday_of_month(year: i32, month: u32) -> Result<u32, InvalidRangeError> {
    validate_month(month)?;
    let first = normalize_date(year, i64::from(month), 1)?;
    Ok(first.weekday().num_days_from_sunday())
}

/// Number of empty cells before the 1st in a grid whose first column is
/// `config.week_start`.
///
/// Returns 0 when the month already begins on the week-start column.
pub fn calculate_blank_days(
    year: i32,
    month: u32,
    config: WeekConfig,
) -> Result<u32, InvalidRangeError> {
    let week_start = validate_week_start(config.week_start)?;
    let first_weekday = first_weekday_of_month(year, month)?;

    let blank_days = (first_weekday + DAYS_PER_WEEK - week_start) % DAYS_PER_WEEK;
    debug!(year, month, week_start, first_weekday, blank_days, "calculated blank days");
    Ok(blank_days)
}

/// Number of days in the month, taken as day 0 of the following month.
pub fn calculate_month_days(year: i32, month: u32) -> Result<u32, InvalidRangeError> {
    validate_month(month)?;
    let last = normalize_date(year, i64::from(month) + 1, 0)?;

    let month_days = last.day();
    debug!(year, month, month_days, "calculated month days");
    Ok(month_days)
}

impl MonthSpec {
    /// Leading blank cells for this month, see [`calculate_blank_days`].
    pub fn blank_days(self, config: WeekConfig) -> Result<u32, InvalidRangeError> {
        calculate_blank_days(self.year, self.month, config)
    }

    /// Number of days in this month, see [`calculate_month_days`].
    pub fn month_days(self) -> Result<u32, InvalidRangeError> {
        calculate_month_days(self.year, self.month)
    }

    /// The 1st of this month, see [`normalize_date`].
    pub fn first_day(self) -> Result<NaiveDate, InvalidRangeError> {
        validate_month(self.month)?;
        normalize_date(self.year, i64::from(self.month), 1)
    }
}
