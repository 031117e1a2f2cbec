//! Picker props loaded from YAML.
//!
//! ```yaml
//! label: Stay
//! mode: range
//! value: { start: 2025/06/10, end: 2025/06/15 }
//! minDate: 2025-05-01
//! maxDate: 2025-07-31
//! dateFormat: YYYY/MM/DD
//! quickSelects: [lastWeek, thisMonth]
//! theme:
//!   daySelected: { background: magenta }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::calendar::bounds::DateBounds;
use crate::calendar::date::CalendarDate;
use crate::calendar::format::{self, DateFormat};
use crate::error::{Error, Result};
use crate::picker::quick_select::QuickSelect;
use crate::picker::selection::SelectionMode;
use crate::picker::state::PickerState;
use crate::picker::value::PickerValue;
use crate::ui::theme::{DatePickerTheme, ThemeOverrides};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    pub label: String,
    pub mode: SelectionMode,
    pub value: Option<PickerValue>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub date_format: DateFormat,
    pub quick_selects: IndexSet<QuickSelect>,
    pub placeholder: String,
    pub disabled: bool,
    pub show_input: bool,
    pub show_clear_button: bool,
    pub theme: ThemeOverrides,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            label: "Date".to_string(),
            mode: SelectionMode::Single,
            value: None,
            min_date: None,
            max_date: None,
            date_format: DateFormat::default(),
            quick_selects: IndexSet::new(),
            placeholder: "Select date".to_string(),
            disabled: false,
            show_input: true,
            show_clear_button: true,
            theme: ThemeOverrides::default(),
        }
    }
}

impl PickerConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Parses `minDate` / `maxDate`. Their relative order is not checked.
    pub fn bounds(&self) -> Result<DateBounds> {
        Ok(DateBounds::new(
            parse_field("minDate", self.min_date.as_deref())?,
            parse_field("maxDate", self.max_date.as_deref())?,
        ))
    }

    pub fn picker_state(&self, today: CalendarDate) -> Result<PickerState> {
        let mut state = PickerState::new(self.mode, today)
            .with_bounds(self.bounds()?)
            .with_format(self.date_format)
            .with_quick_selects(self.quick_selects.iter().copied())
            .with_disabled(self.disabled);
        if let Some(value) = &self.value {
            state = state.with_value(value);
        }
        Ok(state)
    }

    pub fn theme(&self) -> DatePickerTheme {
        DatePickerTheme::default().with_overrides(&self.theme)
    }
}

fn parse_field(field: &'static str, value: Option<&str>) -> Result<Option<CalendarDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => format::parse(text)
            .map(Some)
            .map_err(|source| Error::InvalidDate {
                field,
                value: text.to_string(),
                source,
            }),
    }
}
