use super::date::CalendarDate;

/// Monday on or before `date`. A Sunday maps to the Monday six days earlier.
pub fn start_of_week(date: CalendarDate) -> CalendarDate {
    date.add_days(-i64::from(date.weekday_from_monday()))
}

pub fn end_of_week(date: CalendarDate) -> CalendarDate {
    start_of_week(date).add_days(6)
}

pub fn start_of_month(date: CalendarDate) -> CalendarDate {
    date.add_days(1 - i64::from(date.day()))
}

/// Day 0 of the following month.
pub fn end_of_month(date: CalendarDate) -> CalendarDate {
    let next = start_of_month(date).add_days(31);
    start_of_month(next).add_days(-1)
}

/// Number of days in `month` (1-based) of `year`; 0 when the month does not exist.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    CalendarDate::from_ymd(year, month, 1)
        .map(|first| end_of_month(first).day())
        .unwrap_or(0)
}
