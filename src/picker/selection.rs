use serde::{Deserialize, Serialize};

use crate::calendar::date::CalendarDate;
use crate::calendar::format::{self, DateFormat};

use super::value::PickerValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    /// Range mode only: start chosen, waiting for the second click.
    RangeStartOnly,
    Complete,
}

/// Working selection of one picker. The variant fixes the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Option<CalendarDate>),
    Range {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

impl Selection {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range {
                start: None,
                end: None,
            },
        }
    }

    /// Builds a range with its ends in chronological order.
    pub fn range(a: CalendarDate, b: CalendarDate) -> Self {
        Self::Range {
            start: Some(a.min(b)),
            end: Some(a.max(b)),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range { .. } => SelectionMode::Range,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match *self {
            Self::Single(None) => SelectionPhase::Empty,
            Self::Single(Some(_)) => SelectionPhase::Complete,
            Self::Range { start: None, .. } => SelectionPhase::Empty,
            Self::Range {
                start: Some(_),
                end: None,
            } => SelectionPhase::RangeStartOnly,
            Self::Range {
                start: Some(_),
                end: Some(_),
            } => SelectionPhase::Complete,
        }
    }

    /// The date the viewport follows: the single value or the range start.
    pub fn anchor(&self) -> Option<CalendarDate> {
        match *self {
            Self::Single(date) => date,
            Self::Range { start, .. } => start,
        }
    }

    pub fn to_value(&self, fmt: DateFormat) -> PickerValue {
        let text = |date: Option<CalendarDate>| date.map(|d| fmt.format(d)).unwrap_or_default();
        match *self {
            Self::Single(date) => PickerValue::Single(text(date)),
            Self::Range { start, end } => PickerValue::Range {
                start: text(start),
                end: text(end),
            },
        }
    }

    /// Reads a boundary value into the given mode.
    ///
    /// Empty or unparseable strings become absent ends. A single value given
    /// to a range picker becomes its start; a range given to a single picker
    /// contributes its start.
    pub fn from_value(mode: SelectionMode, value: &PickerValue) -> Self {
        let read = |text: &str| {
            if text.trim().is_empty() {
                None
            } else {
                format::parse(text).ok()
            }
        };
        let (start, end) = match value {
            PickerValue::Single(text) => (read(text), None),
            PickerValue::Range { start, end } => (read(start), read(end)),
        };
        match mode {
            SelectionMode::Single => Self::Single(start.or(end)),
            SelectionMode::Range => match (start, end) {
                (Some(a), Some(b)) => Self::range(a, b),
                (None, Some(b)) => Self::Range {
                    start: Some(b),
                    end: None,
                },
                (start, _) => Self::Range { start, end: None },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn phases() {
        assert_eq!(Selection::empty(SelectionMode::Single).phase(), SelectionPhase::Empty);
        assert_eq!(Selection::empty(SelectionMode::Range).phase(), SelectionPhase::Empty);
        assert_eq!(
            Selection::Single(Some(date(2025, 1, 1))).phase(),
            SelectionPhase::Complete
        );
        assert_eq!(
            Selection::Range {
                start: Some(date(2025, 1, 1)),
                end: None
            }
            .phase(),
            SelectionPhase::RangeStartOnly
        );
        assert_eq!(
            Selection::range(date(2025, 1, 1), date(2025, 1, 1)).phase(),
            SelectionPhase::Complete
        );
    }

    #[test]
    fn range_constructor_orders_ends() {
        let sel = Selection::range(date(2025, 6, 15), date(2025, 6, 10));
        assert_eq!(
            sel,
            Selection::Range {
                start: Some(date(2025, 6, 10)),
                end: Some(date(2025, 6, 15)),
            }
        );
    }

    #[test]
    fn half_range_value_has_empty_end() {
        let sel = Selection::Range {
            start: Some(date(2025, 6, 10)),
            end: None,
        };
        assert_eq!(
            sel.to_value(DateFormat::default()),
            PickerValue::Range {
                start: "2025/06/10".into(),
                end: String::new(),
            }
        );
    }

    #[test]
    fn from_value_normalizes_reversed_range() {
        let value = PickerValue::Range {
            start: "2025/06/15".into(),
            end: "2025/06/10".into(),
        };
        assert_eq!(
            Selection::from_value(SelectionMode::Range, &value),
            Selection::range(date(2025, 6, 10), date(2025, 6, 15))
        );
    }

    #[test]
    fn from_value_drops_garbage() {
        let value = PickerValue::Single("not a date".into());
        assert_eq!(
            Selection::from_value(SelectionMode::Single, &value),
            Selection::Single(None)
        );
    }

    #[test]
    fn from_value_crosses_modes() {
        let single = PickerValue::Single("2025-06-10".into());
        assert_eq!(
            Selection::from_value(SelectionMode::Range, &single),
            Selection::Range {
                start: Some(date(2025, 6, 10)),
                end: None,
            }
        );
        let range = PickerValue::Range {
            start: "2025/06/10".into(),
            end: "2025/06/12".into(),
        };
        assert_eq!(
            Selection::from_value(SelectionMode::Single, &range),
            Selection::Single(Some(date(2025, 6, 10)))
        );
    }
}
