use indexmap::IndexSet;

use crate::calendar::bounds::DateBounds;
use crate::calendar::date::CalendarDate;
use crate::calendar::format::DateFormat;
use crate::calendar::grid::{CalendarGrid, Viewport};

use super::quick_select::QuickSelect;
use super::selection::{Selection, SelectionMode, SelectionPhase};
use super::value::PickerValue;

/// Everything one picker instance remembers between events.
///
/// Mutated only by [`super::reducer::Reducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub(super) selection: Selection,
    pub(super) hover: Option<CalendarDate>,
    pub(super) viewport: Viewport,
    pub(super) bounds: DateBounds,
    pub(super) format: DateFormat,
    pub(super) quick_selects: IndexSet<QuickSelect>,
    pub(super) open: bool,
    pub(super) disabled: bool,
}

impl PickerState {
    /// Empty picker showing the month of `today`.
    pub fn new(mode: SelectionMode, today: CalendarDate) -> Self {
        Self {
            selection: Selection::empty(mode),
            hover: None,
            viewport: Viewport::containing(today),
            bounds: DateBounds::unbounded(),
            format: DateFormat::default(),
            quick_selects: IndexSet::new(),
            open: false,
            disabled: false,
        }
    }

    /// Seeds the selection and centers the viewport on it when present.
    pub fn with_value(mut self, value: &PickerValue) -> Self {
        self.selection = Selection::from_value(self.mode(), value);
        if let Some(anchor) = self.selection.anchor() {
            self.viewport = Viewport::containing(anchor);
        }
        self
    }

    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quick_selects(mut self, keys: impl IntoIterator<Item = QuickSelect>) -> Self {
        self.quick_selects = keys.into_iter().collect();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn hover(&self) -> Option<CalendarDate> {
        self.hover
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn quick_selects(&self) -> &IndexSet<QuickSelect> {
        &self.quick_selects
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        self.bounds.contains(date)
    }

    /// Current selection in boundary form.
    pub fn value(&self) -> PickerValue {
        self.selection.to_value(self.format)
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::build(self.viewport, &self.selection, self.hover, &self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn new_state_is_closed_and_empty() {
        let state = PickerState::new(SelectionMode::Range, date(2025, 6, 18));
        assert_eq!(state.phase(), SelectionPhase::Empty);
        assert!(!state.is_open());
        assert_eq!(state.viewport(), Viewport::containing(date(2025, 6, 18)));
        assert_eq!(
            state.value(),
            PickerValue::Range {
                start: String::new(),
                end: String::new()
            }
        );
    }

    #[test]
    fn initial_value_centers_viewport() {
        let state = PickerState::new(SelectionMode::Single, date(2025, 6, 18))
            .with_value(&PickerValue::Single("2024-02-29".into()));
        assert_eq!(state.selection(), &Selection::Single(Some(date(2024, 2, 29))));
        assert_eq!(state.viewport(), Viewport::new(2024, 2).expect("valid month"));
    }

    #[test]
    fn quick_selects_keep_order_without_duplicates() {
        let state = PickerState::new(SelectionMode::Range, date(2025, 6, 18)).with_quick_selects([
            QuickSelect::LastWeek,
            QuickSelect::ThisMonth,
            QuickSelect::LastWeek,
        ]);
        let keys: Vec<_> = state.quick_selects().iter().copied().collect();
        assert_eq!(keys, vec![QuickSelect::LastWeek, QuickSelect::ThisMonth]);
    }
}
