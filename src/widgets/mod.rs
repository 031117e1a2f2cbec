pub mod base;
pub mod date_picker;
pub mod traits;
