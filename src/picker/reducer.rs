use tracing::{debug, info};

use crate::calendar::date::CalendarDate;
use crate::calendar::format;
use crate::calendar::grid::Viewport;

use super::effect::PickerEffect;
use super::intent::PickerIntent;
use super::quick_select::QuickSelect;
use super::selection::{Selection, SelectionMode};
use super::state::PickerState;

pub struct Reducer;

impl Reducer {
    /// Applies one intent. `today` anchors quick selects and the Today action.
    pub fn reduce(
        state: &mut PickerState,
        intent: PickerIntent,
        today: CalendarDate,
    ) -> Vec<PickerEffect> {
        debug!(?intent, "picker intent");

        if state.disabled && !matches!(intent, PickerIntent::SetValue(_) | PickerIntent::Close) {
            return vec![];
        }

        match intent {
            PickerIntent::Click(date) => click(state, date),
            PickerIntent::Hover(date) => {
                hover(state, date);
                vec![]
            }
            PickerIntent::QuickSelect(key) => quick_select(state, key, today),
            PickerIntent::Today => {
                let selection = match state.mode() {
                    SelectionMode::Single => Selection::Single(Some(today)),
                    SelectionMode::Range => Selection::range(today, today),
                };
                let mut effects = commit(state, selection);
                effects.extend(close(state));
                effects
            }
            PickerIntent::Clear => {
                let mut effects = commit(state, Selection::empty(state.mode()));
                effects.extend(close(state));
                effects
            }
            PickerIntent::TextEdited(text) => text_edited(state, &text),
            PickerIntent::Open => open(state),
            PickerIntent::Close => close(state),
            PickerIntent::Toggle => {
                if state.open {
                    close(state)
                } else {
                    open(state)
                }
            }
            PickerIntent::PrevMonth => {
                state.viewport = state.viewport.prev();
                vec![]
            }
            PickerIntent::NextMonth => {
                state.viewport = state.viewport.next();
                vec![]
            }
            PickerIntent::ShowMonth(viewport) => {
                state.viewport = viewport;
                vec![]
            }
            PickerIntent::SetValue(value) => {
                state.selection = Selection::from_value(state.mode(), &value);
                state.hover = None;
                if let Some(anchor) = state.selection.anchor() {
                    state.viewport = Viewport::containing(anchor);
                }
                vec![]
            }
        }
    }
}

fn click(state: &mut PickerState, date: CalendarDate) -> Vec<PickerEffect> {
    if !state.is_selectable(date) {
        debug!(%date, "click on disabled date ignored");
        return vec![];
    }

    match state.selection {
        Selection::Single(_) => {
            let mut effects = commit(state, Selection::Single(Some(date)));
            effects.extend(close(state));
            effects
        }
        Selection::Range {
            start: Some(start),
            end: None,
        } => {
            let mut effects = commit(state, Selection::range(start, date));
            effects.extend(close(state));
            effects
        }
        // Empty, or a complete range which is discarded.
        Selection::Range { .. } => {
            state.selection = Selection::Range {
                start: Some(date),
                end: None,
            };
            vec![]
        }
    }
}

fn hover(state: &mut PickerState, date: Option<CalendarDate>) {
    if state.mode() != SelectionMode::Range {
        return;
    }
    match date {
        Some(date) if !state.is_selectable(date) => {}
        date => state.hover = date,
    }
}

fn quick_select(state: &mut PickerState, key: QuickSelect, today: CalendarDate) -> Vec<PickerEffect> {
    if state.mode() != SelectionMode::Range || !state.quick_selects.contains(&key) {
        debug!(?key, "quick select unavailable");
        return vec![];
    }
    let (start, end) = key.resolve(today);
    let mut effects = commit(state, Selection::range(start, end));
    effects.extend(close(state));
    effects
}

fn text_edited(state: &mut PickerState, text: &str) -> Vec<PickerEffect> {
    let date = match format::parse(text) {
        Ok(date) => date,
        Err(err) => {
            debug!(text, %err, "typed date not parsed");
            return vec![];
        }
    };

    match state.mode() {
        SelectionMode::Single => commit(state, Selection::Single(Some(date))),
        SelectionMode::Range => {
            state.selection = Selection::Range {
                start: Some(date),
                end: None,
            };
            state.hover = None;
            state.viewport = Viewport::containing(date);
            vec![]
        }
    }
}

fn commit(state: &mut PickerState, selection: Selection) -> Vec<PickerEffect> {
    state.selection = selection;
    state.hover = None;
    if let Some(anchor) = selection.anchor() {
        state.viewport = Viewport::containing(anchor);
    }
    let value = state.value();
    info!(?value, "selection committed");
    vec![PickerEffect::Commit(value)]
}

fn open(state: &mut PickerState) -> Vec<PickerEffect> {
    if state.open {
        return vec![];
    }
    state.open = true;
    vec![PickerEffect::Opened]
}

fn close(state: &mut PickerState) -> Vec<PickerEffect> {
    state.hover = None;
    if !state.open {
        return vec![];
    }
    state.open = false;
    vec![PickerEffect::Closed]
}
