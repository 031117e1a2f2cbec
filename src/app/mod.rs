//! Event routing between the terminal, the dismissal table and the picker.

pub mod runtime;

pub use runtime::Runtime;

use tracing::debug;

use crate::picker::dismiss::PointerDownListeners;
use crate::picker::value::PickerValue;
use crate::terminal::{KeyCode, KeyEvent, PointerKind, TerminalEvent, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::date_picker::DatePicker;
use crate::widgets::traits::{
    Drawable, InteractionResult, Interactive, RenderContext, WidgetAction,
};

const HELP: &str =
    "enter open · tab grid · arrows move · t today · c clear · 1-9 quick · esc close/quit";

type ChangeCallback = Box<dyn FnMut(&PickerValue)>;

pub struct App {
    picker: DatePicker,
    listeners: PointerDownListeners,
    on_change: Option<ChangeCallback>,
    should_exit: bool,
}

impl App {
    /// `listeners` must be the table the picker subscribes to.
    pub fn new(picker: DatePicker, listeners: PointerDownListeners) -> Self {
        Self {
            picker,
            listeners,
            on_change: None,
            should_exit: false,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(&PickerValue) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Returns whether the screen needs repainting.
    pub fn handle_event(&mut self, event: TerminalEvent) -> bool {
        let result = match event {
            TerminalEvent::Key(key) => self.handle_key(key),
            TerminalEvent::Pointer(pointer) => {
                let mut result = InteractionResult::ignored();
                if pointer.kind == PointerKind::Down {
                    let outside = self.listeners.dispatch(pointer.row, pointer.col);
                    if outside.iter().any(|owner| owner == self.picker.id()) {
                        debug!(row = pointer.row, col = pointer.col, "outside press");
                        result.merge(self.picker.on_outside_pointer_down());
                    }
                }
                result.merge(self.picker.on_pointer(pointer));
                result
            }
            TerminalEvent::Resize(_) => InteractionResult::handled(),
            TerminalEvent::Tick => self.picker.on_tick(),
        };
        self.apply(result)
    }

    fn handle_key(&mut self, key: KeyEvent) -> InteractionResult {
        if key == KeyEvent::ctrl('c') || (key.code == KeyCode::Esc && !self.picker.is_open()) {
            self.should_exit = true;
            return InteractionResult::consumed();
        }
        self.picker.on_key(key)
    }

    fn apply(&mut self, result: InteractionResult) -> bool {
        for action in result.actions {
            match action {
                WidgetAction::ValueChanged(value) => {
                    if let Some(callback) = self.on_change.as_mut() {
                        callback(&value);
                    }
                }
            }
        }
        result.request_render
    }

    pub fn view(&self, terminal_size: TerminalSize) -> Vec<SpanLine> {
        let ctx = RenderContext {
            focused: true,
            terminal_size,
        };
        let mut lines = self.picker.draw(&ctx).lines;
        let dim = Style::new().color(Color::DarkGrey);

        lines.push(Vec::new());
        let value = self
            .picker
            .value()
            .and_then(|value| serde_json::to_string(&value).ok())
            .unwrap_or_default();
        lines.push(vec![Span::styled("value: ", dim), Span::new(value)]);
        lines.push(vec![Span::styled(HELP, dim)]);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::date::CalendarDate;
    use crate::picker::selection::SelectionMode;
    use crate::picker::state::PickerState;
    use crate::terminal::PointerEvent;
    use crate::ui::span::line_text;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fixed_today() -> CalendarDate {
        CalendarDate::from_ymd(2025, 6, 18).expect("valid date")
    }

    fn app(mode: SelectionMode) -> (App, Rc<RefCell<Vec<PickerValue>>>) {
        let listeners = PointerDownListeners::new();
        let picker = DatePicker::new(
            "when",
            "When",
            PickerState::new(mode, fixed_today()),
            listeners.clone(),
        )
        .with_clock(fixed_today);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let app = App::new(picker, listeners)
            .on_change(move |value| sink.borrow_mut().push(value.clone()));
        (app, seen)
    }

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent::plain(code))
    }

    fn press(row: u16, col: u16) -> TerminalEvent {
        TerminalEvent::Pointer(PointerEvent {
            kind: PointerKind::Down,
            row,
            col,
        })
    }

    #[test]
    fn commits_reach_the_change_callback() {
        let (mut app, seen) = app(SelectionMode::Single);
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(
            seen.borrow().as_slice(),
            &[PickerValue::Single("2025/06/18".into())]
        );
    }

    #[test]
    fn press_outside_closes_and_inside_does_not() {
        let (mut app, _) = app(SelectionMode::Range);
        app.handle_event(key(KeyCode::Enter));
        assert!(app.picker().is_open());

        // header row, between the arrows
        app.handle_event(press(1, 10));
        assert!(app.picker().is_open());

        assert!(app.handle_event(press(20, 60)));
        assert!(!app.picker().is_open());
    }

    #[test]
    fn escape_closes_then_quits() {
        let (mut app, _) = app(SelectionMode::Single);
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.picker().is_open());
        assert!(!app.should_exit());

        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_exit());
    }

    #[test]
    fn ctrl_c_quits_while_open() {
        let (mut app, _) = app(SelectionMode::Single);
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(TerminalEvent::Key(KeyEvent::ctrl('c')));
        assert!(app.should_exit());
    }

    #[test]
    fn view_shows_value_as_json() {
        let (app, _) = app(SelectionMode::Range);
        let lines = app.view(TerminalSize {
            width: 80,
            height: 24,
        });
        assert_eq!(
            line_text(&lines[2]),
            r#"value: {"start":"","end":""}"#
        );
    }
}
