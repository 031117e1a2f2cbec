use crate::calendar::date::CalendarDate;
use crate::calendar::grid::Viewport;

use super::quick_select::QuickSelect;
use super::value::PickerValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerIntent {
    Click(CalendarDate),
    /// Pointer entered a cell (`Some`) or left the grid (`None`).
    Hover(Option<CalendarDate>),
    QuickSelect(QuickSelect),
    Today,
    Clear,
    /// Full contents of the text box after an edit.
    TextEdited(String),
    Open,
    Close,
    Toggle,
    PrevMonth,
    NextMonth,
    ShowMonth(Viewport),
    /// Controlled override from the caller; never reported back.
    SetValue(PickerValue),
}
