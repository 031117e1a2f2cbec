use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use std::fmt;

/// A concrete day on the proleptic Gregorian calendar.
///
/// Values are always normalized: there is no way to build the 29th of
/// February in a non-leap year. Arithmetic returns new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Strict constructor: `None` unless `(year, month, day)` names a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Rolling constructor: months past 12 carry into following years and
    /// days past the end of the month carry into following months (day 0 is
    /// the last day of the previous month). `None` only when the result
    /// leaves the representable range.
    pub fn from_ymd_lenient(year: i64, month: i64, day: i64) -> Option<Self> {
        let month_index = month.checked_sub(1)?;
        let year = year.checked_add(month_index.div_euclid(12))?;
        let month = (month_index.rem_euclid(12) + 1) as u32;
        let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
        let offset = TimeDelta::try_days(day.checked_sub(1)?)?;
        first.checked_add_signed(offset).map(Self)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// 0 = Monday .. 6 = Sunday.
    pub fn weekday_from_monday(self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// Saturates at the ends of the supported calendar.
    pub fn add_days(self, delta: i64) -> Self {
        TimeDelta::try_days(delta)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
            .unwrap_or(if delta < 0 { Self::MIN } else { Self::MAX })
    }

    /// Keeps the day of month when possible, otherwise clamps it to the
    /// last day of the target month.
    pub fn add_months(self, delta: i32) -> Self {
        let total = self.month() as i32 - 1 + delta;
        let year = self.year() + total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let Some(first) = Self::from_ymd(year, month, 1) else {
            return if delta < 0 { Self::MIN } else { Self::MAX };
        };
        let last = super::math::end_of_month(first).day();
        first.add_days(i64::from(self.day().min(last)) - 1)
    }

    pub const MIN: Self = Self(NaiveDate::MIN);
    pub const MAX: Self = Self(NaiveDate::MAX);
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn strict_constructor_rejects_impossible_days() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_some());
        assert!(CalendarDate::from_ymd(2024, 13, 1).is_none());
    }

    #[test]
    fn lenient_constructor_rolls_days_into_next_month() {
        let rolled = CalendarDate::from_ymd_lenient(2025, 2, 31).expect("in range");
        assert_eq!(rolled, date(2025, 3, 3));
    }

    #[test]
    fn lenient_constructor_rolls_months_into_next_year() {
        let rolled = CalendarDate::from_ymd_lenient(2025, 13, 40).expect("in range");
        assert_eq!(rolled, date(2026, 2, 9));
    }

    #[test]
    fn lenient_day_zero_is_last_day_of_previous_month() {
        let rolled = CalendarDate::from_ymd_lenient(2024, 3, 0).expect("in range");
        assert_eq!(rolled, date(2024, 2, 29));
    }

    #[test]
    fn lenient_month_zero_is_december_of_previous_year() {
        let rolled = CalendarDate::from_ymd_lenient(2025, 0, 15).expect("in range");
        assert_eq!(rolled, date(2024, 12, 15));
    }

    #[test]
    fn lenient_constructor_reports_out_of_range() {
        assert!(CalendarDate::from_ymd_lenient(i64::MAX, 1, 1).is_none());
        assert!(CalendarDate::from_ymd_lenient(2025, 1, i64::MAX).is_none());
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        assert_eq!(date(2024, 12, 31).add_days(1), date(2025, 1, 1));
        assert_eq!(date(2025, 1, 1).add_days(-1), date(2024, 12, 31));
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(date(2025, 1, 31).add_months(1), date(2025, 2, 28));
        assert_eq!(date(2024, 3, 31).add_months(-1), date(2024, 2, 29));
        assert_eq!(date(2025, 11, 15).add_months(3), date(2026, 2, 15));
    }

    #[test]
    fn weekday_indexes() {
        // 2025-06-15 is a Sunday
        let sunday = date(2025, 6, 15);
        assert_eq!(sunday.weekday_from_sunday(), 0);
        assert_eq!(sunday.weekday_from_monday(), 6);
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(date(987, 3, 4).to_string(), "0987-03-04");
    }
}
