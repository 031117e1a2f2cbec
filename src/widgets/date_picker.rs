use std::ops::Range;

use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::calendar::date::CalendarDate;
use crate::calendar::grid::{DAYS_PER_WEEK, GridCell, Viewport, WEEKDAY_NAMES};
use crate::calendar::math::days_in_month;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::picker::dismiss::{PointerDownListeners, Region, Subscription};
use crate::picker::{
    PickerEffect, PickerIntent, PickerState, PickerValue, QuickSelect, Reducer, SelectionMode,
};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, PointerEvent, PointerKind};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use crate::ui::theme::DatePickerTheme;
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, WidgetAction,
};

const INPUT_WIDTH: usize = 12;
const INDENT: &str = "  ";
const CELL_WIDTH: usize = 4;
const GRID_WIDTH: usize = INDENT.len() + CELL_WIDTH * DAYS_PER_WEEK;

// ── Focus sections ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Input,
    Calendar,
}

// ── Hit testing ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Input,
    Toggle,
    PrevMonth,
    NextMonth,
    Day(CalendarDate),
    QuickSelect(QuickSelect),
    Today,
    Clear,
}

#[derive(Debug, Clone)]
struct HitZone {
    row: u16,
    cols: Range<u16>,
    target: Target,
}

/// Builds span lines while recording which columns belong to which target.
struct Composer {
    lines: Vec<SpanLine>,
    zones: Vec<HitZone>,
    col: u16,
}

impl Composer {
    fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            zones: Vec::new(),
            col: 0,
        }
    }

    fn line(&mut self) {
        self.lines.push(Vec::new());
        self.col = 0;
    }

    fn push(&mut self, span: Span) {
        self.col = self.col.saturating_add(span.width() as u16);
        if let Some(line) = self.lines.last_mut() {
            line.push(span);
        }
    }

    fn push_target(&mut self, span: Span, target: Target) {
        let start = self.col;
        let end = start.saturating_add(span.width() as u16);
        self.zones.push(HitZone {
            row: self.lines.len().saturating_sub(1) as u16,
            cols: start..end,
            target,
        });
        self.push(span);
    }

    fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| line.iter().map(Span::width).sum::<usize>())
            .max()
            .unwrap_or(0) as u16
    }

    fn hit(&self, row: u16, col: u16) -> Option<Target> {
        self.zones
            .iter()
            .find(|zone| zone.row == row && zone.cols.contains(&col))
            .map(|zone| zone.target)
    }
}

// ── DatePicker ────────────────────────────────────────────────────────────────

/// Text input with a popup month grid.
///
/// All selection logic lives in [`Reducer`]; the widget maps keys and pointer
/// events to intents and reacts to the returned effects. While the popup is
/// open it holds a [`Subscription`] on the shared pointer-down table so a
/// press outside its region closes it.
pub struct DatePicker {
    base: WidgetBase,
    state: PickerState,
    section: Section,

    /// Contents of the text box. Resynced from the selection on commit.
    text: String,
    /// Keyboard position in the grid.
    cursor: CalendarDate,

    placeholder: String,
    show_input: bool,
    show_clear_button: bool,
    theme: DatePickerTheme,

    listeners: PointerDownListeners,
    subscription: Option<Subscription>,
    clock: fn() -> CalendarDate,
}

impl DatePicker {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        state: PickerState,
        listeners: PointerDownListeners,
    ) -> Self {
        let cursor = state
            .selection()
            .anchor()
            .unwrap_or_else(|| state.viewport().first_day());
        let text = state.value().display_text().to_string();
        Self {
            base: WidgetBase::new(id, label),
            state,
            section: Section::Input,
            text,
            cursor,
            placeholder: "Select date".to_string(),
            show_input: true,
            show_clear_button: true,
            theme: DatePickerTheme::default(),
            listeners,
            subscription: None,
            clock: CalendarDate::today,
        }
    }

    pub fn from_config(
        id: impl Into<String>,
        config: &PickerConfig,
        listeners: PointerDownListeners,
    ) -> Result<Self> {
        Self::from_config_with_clock(id, config, listeners, CalendarDate::today)
    }

    pub fn from_config_with_clock(
        id: impl Into<String>,
        config: &PickerConfig,
        listeners: PointerDownListeners,
        clock: fn() -> CalendarDate,
    ) -> Result<Self> {
        let state = config.picker_state(clock())?;
        Ok(Self::new(id, config.label.clone(), state, listeners)
            .with_clock(clock)
            .with_placeholder(config.placeholder.clone())
            .with_show_input(config.show_input)
            .with_show_clear_button(config.show_clear_button)
            .with_theme(config.theme()))
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_show_input(mut self, show: bool) -> Self {
        self.show_input = show;
        self
    }

    pub fn with_show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn with_theme(mut self, theme: DatePickerTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Source of "today" for quick selects, the Today button and highlighting.
    pub fn with_clock(mut self, clock: fn() -> CalendarDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_origin(&mut self, row: u16, col: u16) {
        self.base.set_origin(row, col);
        self.refresh_region();
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Screen rectangle covered by the widget in its current layout.
    pub fn region(&self) -> Region {
        let composed = self.compose(true);
        let (row, col) = self.base.origin();
        Region::new(row, col, composed.width(), composed.lines.len() as u16)
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn dispatch(&mut self, intent: PickerIntent) -> InteractionResult {
        let effects = Reducer::reduce(&mut self.state, intent, (self.clock)());
        let mut result = InteractionResult::handled();

        for effect in effects {
            match effect {
                PickerEffect::Commit(value) => {
                    self.text = value.display_text().to_string();
                    result
                        .actions
                        .push(WidgetAction::ValueChanged(value));
                }
                PickerEffect::Opened => {
                    self.reset_cursor();
                    self.subscription =
                        Some(self.listeners.subscribe(self.base.id(), self.region()));
                    debug!(id = self.base.id(), "popup opened");
                }
                PickerEffect::Closed => {
                    self.subscription = None;
                    self.section = Section::Input;
                    debug!(id = self.base.id(), "popup closed");
                }
            }
        }

        self.follow_viewport();
        self.refresh_region();
        result
    }

    fn refresh_region(&self) {
        if let Some(subscription) = &self.subscription {
            subscription.set_region(self.region());
        }
    }

    /// Typed text survives the commit it triggers.
    fn edit_text(&mut self) -> InteractionResult {
        let typed = self.text.clone();
        let result = self.dispatch(PickerIntent::TextEdited(typed.clone()));
        self.text = typed;
        result
    }

    fn reset_cursor(&mut self) {
        let viewport = self.state.viewport();
        let today = (self.clock)();
        let fallback = if viewport.contains(today) {
            today
        } else {
            viewport.first_day()
        };
        self.cursor = self
            .state
            .selection()
            .anchor()
            .filter(|date| viewport.contains(*date))
            .unwrap_or(fallback);
    }

    /// Keeps the cursor on the same day number when the month changes.
    fn follow_viewport(&mut self) {
        let viewport = self.state.viewport();
        if viewport.contains(self.cursor) {
            return;
        }
        let day = self
            .cursor
            .day()
            .min(days_in_month(viewport.year(), viewport.month()));
        self.cursor = CalendarDate::from_ymd(viewport.year(), viewport.month(), day)
            .unwrap_or_else(|| viewport.first_day());
    }

    fn move_cursor(&mut self, days: i64) -> InteractionResult {
        self.cursor = self.cursor.add_days(days);
        let mut result = InteractionResult::handled();
        if !self.state.viewport().contains(self.cursor) {
            result.merge(self.dispatch(PickerIntent::ShowMonth(Viewport::containing(
                self.cursor,
            ))));
        }
        result.merge(self.dispatch(PickerIntent::Hover(Some(self.cursor))));
        result
    }

    fn quick_select_at(&mut self, index: usize) -> InteractionResult {
        match self.state.quick_selects().get_index(index).copied() {
            Some(key) => self.dispatch(PickerIntent::QuickSelect(key)),
            None => InteractionResult::ignored(),
        }
    }

    fn hit(&self, row: u16, col: u16) -> Option<Target> {
        let (row, col) = self.base.to_local(row, col)?;
        self.compose(true).hit(row, col)
    }

    fn on_input_key(&mut self, key: KeyEvent) -> InteractionResult {
        let plain = !key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(ch) if plain && self.show_input => {
                self.text.push(ch);
                self.edit_text()
            }
            KeyCode::Backspace if self.show_input => {
                if self.text.pop().is_none() {
                    return InteractionResult::ignored();
                }
                self.edit_text()
            }
            KeyCode::Enter => self.dispatch(PickerIntent::Toggle),
            KeyCode::Down | KeyCode::Tab => {
                let result = self.dispatch(PickerIntent::Open);
                if self.state.is_open() {
                    self.section = Section::Calendar;
                }
                result
            }
            KeyCode::Esc => self.dispatch(PickerIntent::Close),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_calendar_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-(DAYS_PER_WEEK as i64)),
            KeyCode::Down => self.move_cursor(DAYS_PER_WEEK as i64),
            KeyCode::PageUp => self.dispatch(PickerIntent::PrevMonth),
            KeyCode::PageDown => self.dispatch(PickerIntent::NextMonth),
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(PickerIntent::Click(self.cursor)),
            KeyCode::Char('t') => self.dispatch(PickerIntent::Today),
            KeyCode::Char('c') | KeyCode::Delete if self.show_clear_button => {
                self.dispatch(PickerIntent::Clear)
            }
            KeyCode::Char(digit @ '1'..='9') => {
                self.quick_select_at(digit as usize - '1' as usize)
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.section = Section::Input;
                InteractionResult::handled()
            }
            KeyCode::Esc => self.dispatch(PickerIntent::Close),
            _ => InteractionResult::ignored(),
        }
    }

    fn cell_style(&self, cell: &GridCell, today: CalendarDate, is_cursor: bool) -> Style {
        let theme = &self.theme;
        let mut style = if cell.is_disabled {
            theme.day_disabled
        } else if cell.is_start || cell.is_end {
            theme.day_selected
        } else if cell.is_in_range {
            theme.day_in_range
        } else if cell.is_hovered {
            theme.day_hovered
        } else if !cell.in_current_month {
            theme.day_outside
        } else {
            theme.day
        };
        if cell.date == today {
            style = style.merge(&theme.today);
        }
        if is_cursor {
            style = style.merge(&theme.cursor);
        }
        style
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    fn compose(&self, focused: bool) -> Composer {
        let theme = &self.theme;
        let mut out = Composer::new();

        // ── Input row ─────────────────────────────────────────────────────────
        out.push(Span::styled(self.base.label_prefix(), theme.label));
        if self.show_input {
            let (text, mut style) = if self.text.is_empty() {
                (self.placeholder.as_str(), theme.placeholder)
            } else {
                (self.text.as_str(), theme.input)
            };
            if self.state.is_disabled() {
                style = theme.day_disabled;
            } else if focused && self.section == Section::Input {
                style = style.merge(&theme.cursor);
            }
            out.push_target(Span::styled(fit(text, INPUT_WIDTH), style), Target::Input);
            out.push(Span::new(" "));
        }
        let icon = if self.state.is_open() { "[▴]" } else { "[▾]" };
        out.push_target(Span::styled(icon, theme.header), Target::Toggle);

        if !self.state.is_open() {
            return out;
        }

        // ── Month header ──────────────────────────────────────────────────────
        let grid = self.state.grid();
        out.line();
        out.push(Span::new(INDENT));
        out.push_target(Span::styled("‹", theme.header), Target::PrevMonth);
        out.push(Span::styled(
            center(&grid.viewport().title(), GRID_WIDTH - INDENT.len() - 2),
            theme.header,
        ));
        out.push_target(Span::styled("›", theme.header), Target::NextMonth);

        // ── Weekday header ────────────────────────────────────────────────────
        out.line();
        out.push(Span::new(INDENT));
        for name in WEEKDAY_NAMES {
            out.push(Span::styled(format!(" {name} "), theme.weekday));
        }

        // ── Grid ──────────────────────────────────────────────────────────────
        let today = (self.clock)();
        let grid_focused = focused && self.section == Section::Calendar;
        for row in grid.rows() {
            out.line();
            out.push(Span::new(INDENT));
            for cell in row {
                let is_cursor = grid_focused && cell.date == self.cursor;
                let (l, r) = if is_cursor { ("[", "]") } else { (" ", " ") };
                out.push_target(
                    Span::styled(
                        format!("{l}{:2}{r}", cell.date.day()),
                        self.cell_style(cell, today, is_cursor),
                    ),
                    Target::Day(cell.date),
                );
            }
        }

        // ── Quick selects ─────────────────────────────────────────────────────
        if self.state.mode() == SelectionMode::Range && !self.state.quick_selects().is_empty() {
            out.line();
            out.push(Span::new(INDENT));
            for (i, key) in self.state.quick_selects().iter().enumerate() {
                if i > 0 {
                    out.push(Span::new(" "));
                }
                let text = if i < 9 {
                    format!("[{} {}]", i + 1, key.label())
                } else {
                    format!("[{}]", key.label())
                };
                out.push_target(
                    Span::styled(text, theme.quick_select_button),
                    Target::QuickSelect(*key),
                );
            }
        }

        // ── Footer ────────────────────────────────────────────────────────────
        out.line();
        out.push(Span::new(INDENT));
        out.push_target(Span::styled("[Today]", theme.today_button), Target::Today);
        if self.show_clear_button {
            out.push(Span::new(" "));
            out.push_target(Span::styled("[Clear]", theme.clear_button), Target::Clear);
        }

        out
    }
}

fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn center(text: &str, width: usize) -> String {
    let text = fit(text.trim_end(), width);
    let content = text.trim_end();
    let pad = width.saturating_sub(content.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(pad - left))
}

// ── Drawable ──────────────────────────────────────────────────────────────────

impl Drawable for DatePicker {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        DrawOutput {
            lines: self.compose(ctx.focused).lines,
        }
    }
}

// ── Interactive ───────────────────────────────────────────────────────────────

impl Interactive for DatePicker {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if self.state.is_disabled() {
            return match key.code {
                KeyCode::Esc if self.state.is_open() => self.dispatch(PickerIntent::Close),
                _ => InteractionResult::ignored(),
            };
        }
        match self.section {
            Section::Input => self.on_input_key(key),
            Section::Calendar => self.on_calendar_key(key),
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) -> InteractionResult {
        if self.state.is_disabled() {
            return InteractionResult::ignored();
        }
        let target = self.hit(event.row, event.col);

        match event.kind {
            PointerKind::Moved => {
                if !self.state.is_open() || self.state.mode() != SelectionMode::Range {
                    return InteractionResult::ignored();
                }
                let hover = match target {
                    Some(Target::Day(date)) => Some(date),
                    _ => None,
                };
                if hover == self.state.hover() {
                    return InteractionResult::ignored();
                }
                self.dispatch(PickerIntent::Hover(hover))
            }
            PointerKind::Down => match target {
                None => InteractionResult::ignored(),
                Some(Target::Input) => {
                    self.section = Section::Input;
                    self.dispatch(PickerIntent::Open)
                }
                Some(Target::Toggle) => self.dispatch(PickerIntent::Toggle),
                Some(Target::PrevMonth) => self.dispatch(PickerIntent::PrevMonth),
                Some(Target::NextMonth) => self.dispatch(PickerIntent::NextMonth),
                Some(Target::Day(date)) => {
                    self.cursor = date;
                    self.section = Section::Calendar;
                    self.dispatch(PickerIntent::Click(date))
                }
                Some(Target::QuickSelect(key)) => self.dispatch(PickerIntent::QuickSelect(key)),
                Some(Target::Today) => self.dispatch(PickerIntent::Today),
                Some(Target::Clear) => self.dispatch(PickerIntent::Clear),
            },
        }
    }

    fn on_outside_pointer_down(&mut self) -> InteractionResult {
        if !self.state.is_open() {
            return InteractionResult::ignored();
        }
        self.dispatch(PickerIntent::Close)
    }

    fn value(&self) -> Option<PickerValue> {
        Some(self.state.value())
    }

    fn set_value(&mut self, value: PickerValue) {
        self.dispatch(PickerIntent::SetValue(value));
        self.text = self.state.value().display_text().to_string();
    }
}
