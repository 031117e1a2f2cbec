use serde::{Deserialize, Serialize};

use crate::ui::style::{Color, Style};

/// Styles for every visual slot of the date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerTheme {
    pub label: Style,
    pub input: Style,
    pub placeholder: Style,
    pub header: Style,
    pub weekday: Style,
    pub day: Style,
    pub day_outside: Style,
    pub day_selected: Style,
    pub day_in_range: Style,
    pub day_hovered: Style,
    pub day_disabled: Style,
    pub today: Style,
    pub cursor: Style,
    pub quick_select_button: Style,
    pub today_button: Style,
    pub clear_button: Style,
}

impl Default for DatePickerTheme {
    fn default() -> Self {
        Self {
            label: Style::new().bold(),
            input: Style::new().underline(),
            placeholder: Style::new().color(Color::DarkGrey),
            header: Style::new().bold(),
            weekday: Style::new().color(Color::DarkGrey),
            day: Style::new(),
            day_outside: Style::new().color(Color::DarkGrey),
            day_selected: Style::new().color(Color::Black).background(Color::Cyan).bold(),
            day_in_range: Style::new().color(Color::Black).background(Color::Blue),
            day_hovered: Style::new().background(Color::Blue),
            day_disabled: Style::new().color(Color::DarkGrey).dim(),
            today: Style::new().underline(),
            cursor: Style::new().reversed(),
            quick_select_button: Style::new().color(Color::Cyan),
            today_button: Style::new().color(Color::Green),
            clear_button: Style::new().color(Color::Red),
        }
    }
}

/// Per-slot additions layered over the base theme. Keys are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOverrides {
    pub label: Option<Style>,
    pub input: Option<Style>,
    pub placeholder: Option<Style>,
    pub header: Option<Style>,
    pub weekday: Option<Style>,
    pub day: Option<Style>,
    pub day_outside: Option<Style>,
    pub day_selected: Option<Style>,
    pub day_in_range: Option<Style>,
    pub day_hovered: Option<Style>,
    pub day_disabled: Option<Style>,
    pub today: Option<Style>,
    pub cursor: Option<Style>,
    pub quick_select_button: Option<Style>,
    pub today_button: Option<Style>,
    pub clear_button: Option<Style>,
}

impl DatePickerTheme {
    /// Merges overrides into the base slots rather than replacing them.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        let slots: [(&mut Style, &Option<Style>); 16] = [
            (&mut self.label, &overrides.label),
            (&mut self.input, &overrides.input),
            (&mut self.placeholder, &overrides.placeholder),
            (&mut self.header, &overrides.header),
            (&mut self.weekday, &overrides.weekday),
            (&mut self.day, &overrides.day),
            (&mut self.day_outside, &overrides.day_outside),
            (&mut self.day_selected, &overrides.day_selected),
            (&mut self.day_in_range, &overrides.day_in_range),
            (&mut self.day_hovered, &overrides.day_hovered),
            (&mut self.day_disabled, &overrides.day_disabled),
            (&mut self.today, &overrides.today),
            (&mut self.cursor, &overrides.cursor),
            (&mut self.quick_select_button, &overrides.quick_select_button),
            (&mut self.today_button, &overrides.today_button),
            (&mut self.clear_button, &overrides.clear_button),
        ];
        for (slot, extra) in slots {
            if let Some(extra) = extra {
                *slot = slot.merge(extra);
            }
        }
        self
    }
}
