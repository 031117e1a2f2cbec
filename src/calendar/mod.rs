//! Pure calendar engine: dates, date math, text formats and the month grid.

pub mod bounds;
pub mod date;
pub mod format;
pub mod grid;
pub mod math;

pub use bounds::DateBounds;
pub use date::CalendarDate;
pub use format::{DateFormat, ParseDateError, YearDigits};
pub use grid::{CalendarGrid, GridCell, Viewport};
