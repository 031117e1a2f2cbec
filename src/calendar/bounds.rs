use super::date::CalendarDate;

/// Optional inclusive limits on selectable dates.
///
/// Inconsistent limits (`max < min`) are accepted as given and simply make
/// every date unselectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| min <= date) && self.max.is_none_or(|max| date <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn unbounded_accepts_everything() {
        assert!(DateBounds::unbounded().contains(CalendarDate::MIN));
        assert!(DateBounds::unbounded().contains(CalendarDate::MAX));
    }

    #[test]
    fn limits_are_inclusive() {
        let bounds = DateBounds::new(Some(date(2025, 5, 1)), Some(date(2025, 7, 31)));
        assert!(bounds.contains(date(2025, 5, 1)));
        assert!(bounds.contains(date(2025, 7, 31)));
        assert!(!bounds.contains(date(2025, 4, 30)));
        assert!(!bounds.contains(date(2025, 8, 1)));
    }

    #[test]
    fn single_sided_bounds() {
        let min_only = DateBounds::new(Some(date(2025, 5, 1)), None);
        assert!(min_only.contains(date(2999, 1, 1)));
        assert!(!min_only.contains(date(2025, 4, 30)));
    }

    #[test]
    fn inverted_bounds_reject_everything() {
        let bounds = DateBounds::new(Some(date(2025, 7, 31)), Some(date(2025, 5, 1)));
        assert!(!bounds.contains(date(2025, 6, 15)));
        assert!(!bounds.contains(date(2025, 5, 1)));
    }
}
