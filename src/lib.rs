pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod picker;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use calendar::{CalendarDate, CalendarGrid, DateBounds, DateFormat, GridCell, Viewport};
pub use config::PickerConfig;
pub use error::{Error, Result};
pub use picker::{PickerEffect, PickerIntent, PickerState, PickerValue, Reducer, SelectionMode};
