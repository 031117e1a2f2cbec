//! Selection state machine for single-date and range pickers.

pub mod dismiss;
pub mod effect;
pub mod intent;
pub mod quick_select;
pub mod reducer;
pub mod selection;
pub mod state;
pub mod value;

pub use effect::PickerEffect;
pub use intent::PickerIntent;
pub use quick_select::QuickSelect;
pub use reducer::Reducer;
pub use selection::{Selection, SelectionMode, SelectionPhase};
pub use state::PickerState;
pub use value::PickerValue;
