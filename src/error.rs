//! Error types for grid calculations and weekday label formatting.

/// Input outside the range a calculation accepts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRangeError {
    /// Month index outside 0..=11 (January = 0).
    #[error("invalid month: {month} (must be 0..=11)")]
    Month { month: u32 },

    /// Week start outside 0..=6 (Sunday = 0).
    #[error("invalid week start: {week_start} (must be 0..=6)")]
    WeekStart { week_start: u32 },

    /// The normalized date does not fit the supported calendar range.
    #[error("date out of range: year {year}, month {month}, day {day}")]
    Date { year: i32, month: i64, day: i64 },
}

/// Failure of the locale facility while producing a label.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormattingError {
    #[error("unsupported locale: {tag}")]
    UnsupportedLocale { tag: String },
}

/// Any failure of a grid operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] InvalidRangeError),

    #[error(transparent)]
    Formatting(#[from] FormattingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = InvalidRangeError::Month { month: 12 };
        assert_eq!(err.to_string(), "invalid month: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_week_start() {
        let err = InvalidRangeError::WeekStart { week_start: 7 };
        assert_eq!(err.to_string(), "invalid week start: 7 (must be 0..=6)");
    }

    #[test]
    fn error_unsupported_locale() {
        let err = FormattingError::UnsupportedLocale {
            tag: "xx-YY".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported locale: xx-YY");
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: Error = InvalidRangeError::Month { month: 40 }.into();
        assert_eq!(err.to_string(), "invalid month: 40 (must be 0..=11)");

        let err: Error = FormattingError::UnsupportedLocale {
            tag: "zz".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Formatting(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<InvalidRangeError>();
        assert_impl::<FormattingError>();
        assert_impl::<Error>();
    }
}
