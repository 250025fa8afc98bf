//! Localized weekday labels and text rendering of a month grid.

use chrono::{Datelike, Days, Locale, NaiveDate, TimeDelta};
use icu_locale::{LanguageIdentifier, LocaleExpander, TransformResult};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::calendar::validate_week_start;
use crate::error::{Error, FormattingError, InvalidRangeError};
use crate::types::{
    CELL_WIDTH, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, DAYS_PER_WEEK,
    GridContext, LocaleConfig, MonthSpec,
};

/// Source of locale-aware weekday names.
pub trait WeekdayNames {
    /// Shortest customary label for the weekday of `date` in `locale`
    /// (a BCP-47 tag such as `en-US`).
    fn narrow_weekday_name(&self, date: NaiveDate, locale: &str) -> Result<String, FormattingError>;
}

/// [`WeekdayNames`] backed by chrono's bundled locale data.
///
/// Labels are derived from the locale's abbreviated weekday names (`%a`,
/// trailing period dropped). Each abbreviation is reduced to its first
/// character, e.g. `S` for `Sun` in `en-US`, unless that loses the day:
/// - when more than two days share an initial, the whole week keeps its
///   abbreviations (`CN T2 T3 T4 T5 T6 T7` in `vi-VN`);
/// - a day whose initial is another day's full abbreviation keeps its own
///   (`อา` beside `อ` in `th-TH`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoWeekdayNames;

// 2 January 2000 was a Sunday
const REFERENCE_SUNDAY: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 2) {
    Some(date) => date,
    None => panic!("2000-01-02 is a valid date"),
};

impl ChronoWeekdayNames {
    /// Narrow labels for a whole week, indexed Sunday = 0.
    pub fn narrow_week(&self, locale: Locale) -> [String; 7] {
        let abbreviations: [String; 7] = std::array::from_fn(|index| {
            let date = REFERENCE_SUNDAY + Days::new(index as u64);
            let abbreviated = date.format_localized("%a", locale).to_string();
            abbreviated.trim_end_matches('.').to_string()
        });
        let initials = abbreviations
            .each_ref()
            .map(|name| name.chars().take(1).collect::<String>());

        let crowded = initials
            .iter()
            .any(|initial| initials.iter().filter(|other| *other == initial).count() > 2);
        if crowded {
            return abbreviations;
        }

        std::array::from_fn(|index| {
            let shadowed = abbreviations
                .iter()
                .enumerate()
                .any(|(other, name)| other != index && *name == initials[index]);
            if shadowed {
                abbreviations[index].clone()
            } else {
                initials[index].clone()
            }
        })
    }
}

impl WeekdayNames for ChronoWeekdayNames {
    fn narrow_weekday_name(&self, date: NaiveDate, locale: &str) -> Result<String, FormattingError> {
        let locale = parse_locale(locale)?;
        let index = date.weekday().num_days_from_sunday() as usize;
        let mut week = self.narrow_week(locale);
        Ok(std::mem::take(&mut week[index]))
    }
}

/// Resolve a BCP-47 tag (`en-US`, `sr-Latn-RS`, `de-DE-u-ca-gregory`) or a
/// POSIX name (`en_US`, `sr_RS@latin`) to one of chrono's locales.
///
/// Candidates are tried in order: the exact POSIX name, language and region
/// (with a script modifier when a script is given), the bare language, then
/// the same again after filling in likely subtags, so `en` resolves to
/// `en_US` and `sr` to `sr_RS`. Extensions and variants are ignored.
pub fn parse_locale(tag: &str) -> Result<Locale, FormattingError> {
    let unsupported = || FormattingError::UnsupportedLocale {
        tag: tag.to_string(),
    };

    if let Ok(locale) = tag.parse::<Locale>() {
        return Ok(locale);
    }

    let mut id = tag
        .replace('_', "-")
        .parse::<icu_locale::Locale>()
        .map_err(|_| unsupported())?
        .id;

    let mut candidates = posix_candidates(&id);
    if LocaleExpander::new_common().maximize(&mut id) == TransformResult::Modified {
        candidates.extend(posix_candidates(&id));
    }

    let locale = candidates
        .iter()
        .find_map(|name| name.parse::<Locale>().ok())
        .ok_or_else(unsupported)?;
    trace!(tag, ?candidates, "resolved locale");
    Ok(locale)
}

/// POSIX locale names for a language identifier, most specific first.
fn posix_candidates(id: &LanguageIdentifier) -> Vec<String> {
    let language = id.language.as_str();
    let mut names = Vec::with_capacity(3);

    if let Some(region) = id.region {
        let base = format!("{}_{}", language, region.as_str());
        let modifier = id.script.and_then(|script| match script.as_str() {
            "Latn" => Some("latin"),
            "Cyrl" => Some("cyrillic"),
            _ => None,
        });
        if let Some(modifier) = modifier {
            names.push(format!("{}@{}", base, modifier));
        }
        names.push(base);
    }
    names.push(language.to_string());
    names
}

/// Date in the week of `today` whose civil weekday index equals `week_start`.
///
/// This is `today - weekday(today) + week_start`, so it can lie before or
/// after `today`, but always within the Sunday-first week containing it.
pub fn week_anchor(today: NaiveDate, week_start: u32) -> Result<NaiveDate, InvalidRangeError> {
    let week_start = validate_week_start(week_start)?;
    let shift = i64::from(week_start) - i64::from(today.weekday().num_days_from_sunday());

    today
        .checked_add_signed(TimeDelta::days(shift))
        .ok_or(InvalidRangeError::Date {
            year: today.year(),
            month: i64::from(today.month0()),
            day: i64::from(today.day()) + shift,
        })
}

/// Seven narrow weekday labels starting at `config.week_start`, using the
/// local current date as the week anchor.
pub fn generate_week_days(config: &LocaleConfig) -> Result<Vec<String>, Error> {
    let today = chrono::Local::now().date_naive();
    generate_week_days_with(&ChronoWeekdayNames, today, config)
}

/// Seven weekday labels from `names`, anchored on the week containing `today`.
///
/// Formatting errors from `names` are returned unchanged.
pub fn generate_week_days_with<N>(
    names: &N,
    today: NaiveDate,
    config: &LocaleConfig,
) -> Result<Vec<String>, Error>
where
    N: WeekdayNames + ?Sized,
{
    let anchor = week_anchor(today, config.week_start)?;

    let labels = (0..u64::from(DAYS_PER_WEEK))
        .map(|offset| -> Result<String, Error> {
            let date = anchor
                .checked_add_days(Days::new(offset))
                .ok_or(InvalidRangeError::Date {
                    year: anchor.year(),
                    month: i64::from(anchor.month0()),
                    day: i64::from(anchor.day()) + offset as i64,
                })?;
            Ok(names.narrow_weekday_name(date, &config.locale)?)
        })
        .collect::<Result<Vec<String>, Error>>()?;

    debug!(locale = %config.locale, week_start = config.week_start, ?labels, "generated week days");
    Ok(labels)
}

/// Width of a rendered week row: seven cells and six separators.
pub fn grid_width() -> usize {
    let days = DAYS_PER_WEEK as usize;
    days * CELL_WIDTH + (days - 1)
}

/// Localized month name, e.g. `February` for `en-US`.
pub fn get_month_name(month: MonthSpec, locale: &str) -> Result<String, Error> {
    let locale = parse_locale(locale)?;
    let first = month.first_day()?;
    Ok(first.format_localized("%B", locale).to_string())
}

/// Format month header (localized name and year) with optional color.
pub fn format_month_header(ctx: &GridContext, month: MonthSpec) -> Result<String, Error> {
    let month_name = get_month_name(month, &ctx.locale)?;
    let header = format!("{} {}", month_name, month.year);
    let centered = center_text(&header, grid_width());
    Ok(if ctx.color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    })
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Right-align text in a cell, counting display columns rather than chars.
fn pad_cell(text: &str) -> String {
    let padding = CELL_WIDTH.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

/// Format weekday header row with optional color.
pub fn format_weekday_headers(ctx: &GridContext, labels: &[String]) -> String {
    let row = labels
        .iter()
        .map(|label| pad_cell(label))
        .collect::<Vec<_>>()
        .join(" ");

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format a day cell, highlighting today in reverse video.
fn format_day(ctx: &GridContext, month: MonthSpec, day: u32) -> String {
    let is_today = ctx.color
        && ctx.today.day() == day
        && ctx.today.month0() == month.month
        && ctx.today.year() == month.year;

    let day_str = format!("{:>2}", day);
    if is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format month as lines: header, weekday labels, then one line per week.
///
/// Leading blank cells come from the blank-day count; the last week is not
/// padded on the right.
pub fn format_month_grid(ctx: &GridContext, month: MonthSpec) -> Result<Vec<String>, Error> {
    let config = ctx.locale_config();
    let blank_days = month.blank_days(config.week())?;
    let month_days = month.month_days()?;
    let labels = generate_week_days_with(&ChronoWeekdayNames, ctx.today, &config)?;

    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(ctx, month)?);
    lines.push(format_weekday_headers(ctx, &labels));

    let cells: Vec<String> = (0..blank_days)
        .map(|_| " ".repeat(CELL_WIDTH))
        .chain((1..=month_days).map(|day| format_day(ctx, month, day)))
        .collect();

    for week in cells.chunks(DAYS_PER_WEEK as usize) {
        lines.push(week.join(" "));
    }

    Ok(lines)
}

/// Raw grid values: blank days, month length and weekday labels.
pub fn format_summary(ctx: &GridContext, month: MonthSpec) -> Result<Vec<String>, Error> {
    let config = ctx.locale_config();
    let blank_days = month.blank_days(config.week())?;
    let month_days = month.month_days()?;
    let labels = generate_week_days_with(&ChronoWeekdayNames, ctx.today, &config)?;

    Ok(vec![
        format!("blank_days: {}", blank_days),
        format!("month_days: {}", month_days),
        format!("weekdays: {}", labels.join(" ")),
    ])
}

/// Print a single month grid, or its raw values in summary mode.
pub fn print_month(ctx: &GridContext, month: MonthSpec) -> Result<(), Error> {
    let lines = if ctx.summary {
        format_summary(ctx, month)?
    } else {
        format_month_grid(ctx, month)?
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
