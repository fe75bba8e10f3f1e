//! Timestamp pattern value object

use crate::core::error::FormatError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default timestamp pattern: local time with millisecond precision.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A validated chrono strftime pattern.
///
/// chrono reports bad patterns only when formatting, so the pattern is checked
/// once up front and formatting can never fail afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimestampFormat(String);

impl TimestampFormat {
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidTimestamp(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    pub fn format<Tz>(&self, time: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        time.format(&self.0).to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_PATTERN.to_string())
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TimestampFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimestampFormat> for String {
    fn from(format: TimestampFormat) -> Self {
        format.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_default_pattern_renders_millis() {
        let time = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_milli_opt(12, 0, 0, 123)
            .unwrap()
            .and_utc();
        assert_eq!(
            TimestampFormat::default().format(&time),
            "2026-10-19 12:00:00,123"
        );
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        assert_eq!(
            TimestampFormat::parse("%Y-%Q").unwrap_err(),
            FormatError::InvalidTimestamp("%Y-%Q".to_string())
        );
    }

    #[test]
    fn test_custom_pattern() {
        let format = TimestampFormat::parse("%H:%M").unwrap();
        let time = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format.format(&time), "03:04");
    }
}
