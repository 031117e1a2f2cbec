use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::date::CalendarDate;

pub const DEFAULT_PATTERN: &str = "YYYY/MM/DD";

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-/]").expect("separator pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    #[error("expected year, month and day separated by '-' or '/', found {found} part(s)")]
    TooFewParts { found: usize },
    #[error("'{part}' is not a number")]
    NotNumeric { part: String },
    #[error("date is outside the supported calendar range")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearDigits {
    #[default]
    Four,
    Two,
}

/// Display format: year, month, day joined by a single separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    year: YearDigits,
    separator: char,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            year: YearDigits::Four,
            separator: '/',
        }
    }
}

impl DateFormat {
    pub fn new(year: YearDigits, separator: char) -> Self {
        Self { year, separator }
    }

    /// Reads a pattern such as `YYYY/MM/DD` or `yy-mm-dd`.
    ///
    /// Only the year width and the separator are taken from the pattern;
    /// fields are always emitted year first. Anything unrecognized falls back
    /// to a four-digit year.
    pub fn from_pattern(pattern: &str) -> Self {
        let upper = pattern.trim().to_ascii_uppercase();
        let year_token: String = upper.chars().take_while(|c| *c == 'Y').collect();
        let year = if year_token.len() == 2 {
            YearDigits::Two
        } else {
            YearDigits::Four
        };
        let separator = upper
            .chars()
            .find(|c| !c.is_ascii_alphabetic())
            .unwrap_or('/');
        Self { year, separator }
    }

    pub fn year_digits(&self) -> YearDigits {
        self.year
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn pattern(&self) -> String {
        let year = match self.year {
            YearDigits::Four => "YYYY",
            YearDigits::Two => "YY",
        };
        let sep = self.separator;
        format!("{year}{sep}MM{sep}DD")
    }

    pub fn format(&self, date: CalendarDate) -> String {
        format(date, *self)
    }
}

impl Serialize for DateFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern())
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Ok(Self::from_pattern(&pattern))
    }
}

pub fn format(date: CalendarDate, format: DateFormat) -> String {
    let sep = format.separator;
    let year = match format.year {
        YearDigits::Four => format!("{:04}", date.year()),
        YearDigits::Two => format!("{:02}", date.year().rem_euclid(100)),
    };
    format!("{year}{sep}{:02}{sep}{:02}", date.month(), date.day())
}

/// Lenient parse of `year-month-day` (either `-` or `/` separates fields).
///
/// Years below 100 are read as `2000 + year`. Month and day are not range
/// checked: overflow rolls into the following month or year, so
/// `2025/02/31` is the 3rd of March. Fields beyond the third are ignored.
pub fn parse(text: &str) -> Result<CalendarDate, ParseDateError> {
    let parts: Vec<&str> = SEPARATORS.split(text).collect();
    if parts.len() < 3 {
        return Err(ParseDateError::TooFewParts { found: parts.len() });
    }

    let mut numbers = [0i64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseDateError::NotNumeric {
                part: part.to_string(),
            })?;
    }

    let [year, month, day] = numbers;
    let year = if year < 100 { 2000 + year } else { year };
    CalendarDate::from_ymd_lenient(year, month, day).ok_or(ParseDateError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn formats_four_digit_year_with_padding() {
        let fmt = DateFormat::from_pattern(DEFAULT_PATTERN);
        assert_eq!(format(date(2025, 6, 5), fmt), "2025/06/05");
        assert_eq!(format(date(987, 12, 31), fmt), "0987/12/31");
    }

    #[test]
    fn formats_two_digit_year() {
        let fmt = DateFormat::from_pattern("yy/mm/dd");
        assert_eq!(fmt.year_digits(), YearDigits::Two);
        assert_eq!(format(date(2025, 6, 5), fmt), "25/06/05");
        assert_eq!(format(date(2005, 1, 2), fmt), "05/01/02");
    }

    #[test]
    fn pattern_separator_is_kept() {
        let fmt = DateFormat::from_pattern("YYYY-MM-DD");
        assert_eq!(fmt.separator(), '-');
        assert_eq!(fmt.format(date(2025, 6, 5)), "2025-06-05");
        assert_eq!(fmt.pattern(), "YYYY-MM-DD");
    }

    #[test]
    fn unknown_pattern_falls_back_to_four_digits() {
        let fmt = DateFormat::from_pattern("whatever");
        assert_eq!(fmt, DateFormat::default());
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(parse("2025-06-15"), Ok(date(2025, 6, 15)));
        assert_eq!(parse("2025/06/15"), Ok(date(2025, 6, 15)));
        assert_eq!(parse("2025-6/15"), Ok(date(2025, 6, 15)));
    }

    #[test]
    fn two_digit_year_is_this_century() {
        assert_eq!(parse("25/06/15"), Ok(date(2025, 6, 15)));
        assert_eq!(parse("0099/01/01"), Ok(date(2099, 1, 1)));
    }

    #[test]
    fn too_few_parts_fail() {
        assert_eq!(parse("2025/06"), Err(ParseDateError::TooFewParts { found: 2 }));
        assert_eq!(parse(""), Err(ParseDateError::TooFewParts { found: 1 }));
    }

    #[test]
    fn non_numeric_parts_fail() {
        assert!(matches!(
            parse("2025/ab/01"),
            Err(ParseDateError::NotNumeric { .. })
        ));
        assert!(matches!(
            parse("2025/06/"),
            Err(ParseDateError::NotNumeric { .. })
        ));
    }

    #[test]
    fn extra_parts_are_ignored() {
        assert_eq!(parse("2025/06/15/99"), Ok(date(2025, 6, 15)));
    }

    #[test]
    fn out_of_range_days_roll_over() {
        assert_eq!(parse("2025-02-31"), Ok(date(2025, 3, 3)));
        assert_eq!(parse("25/13/40"), Ok(date(2026, 2, 9)));
    }

    #[test]
    fn huge_values_are_out_of_range() {
        assert_eq!(parse("99999999999/01/01"), Err(ParseDateError::OutOfRange));
    }

    #[test]
    fn round_trips_four_digit_years() {
        let fmt = DateFormat::default();
        let mut d = date(100, 1, 1);
        for _ in 0..400 {
            assert_eq!(parse(&format(d, fmt)), Ok(d));
            d = d.add_days(97);
        }
        let far = date(9999, 12, 31);
        assert_eq!(parse(&format(far, fmt)), Ok(far));
    }

    #[test]
    fn format_deserializes_from_pattern_string() {
        let fmt: DateFormat = serde_yaml::from_str("\"yy-mm-dd\"").expect("pattern");
        assert_eq!(fmt, DateFormat::new(YearDigits::Two, '-'));
    }
}
