use super::bounds::DateBounds;
use super::date::CalendarDate;
use crate::picker::selection::Selection;

pub const WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const CELL_COUNT: usize = WEEKS * DAYS_PER_WEEK;

pub const WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ── Viewport ──────────────────────────────────────────────────────────────────

/// The displayed month. Independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Viewport {
    year: i32,
    month: u32,
}

impl Viewport {
    /// `None` for a month outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_ymd(self.year, self.month, 1).unwrap_or(CalendarDate::MIN)
    }

    pub fn next(&self) -> Self {
        Self::containing(self.first_day().add_months(1))
    }

    pub fn prev(&self) -> Self {
        Self::containing(self.first_day().add_months(-1))
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize).saturating_sub(1) % 12]
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

// ── Cells ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: CalendarDate,
    pub in_current_month: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_in_range: bool,
    pub is_hovered: bool,
    pub is_disabled: bool,
}

impl GridCell {
    /// Painted as chosen: an endpoint or inside the committed range.
    pub fn is_selected(&self) -> bool {
        self.is_start || self.is_end || self.is_in_range
    }
}

/// Six Sunday-first weeks around one month, always 42 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    viewport: Viewport,
    cells: [GridCell; CELL_COUNT],
}

impl CalendarGrid {
    pub fn build(
        viewport: Viewport,
        selection: &Selection,
        hover: Option<CalendarDate>,
        bounds: &DateBounds,
    ) -> Self {
        let first = viewport.first_day();
        let lead = i64::from(first.weekday_from_sunday());

        let cells = std::array::from_fn(|i| {
            let date = first.add_days(i as i64 - lead);
            let mut cell = GridCell {
                date,
                in_current_month: viewport.contains(date),
                is_start: false,
                is_end: false,
                is_in_range: false,
                is_hovered: false,
                is_disabled: !bounds.contains(date),
            };
            mark_selection(&mut cell, selection, hover);
            cell
        });

        Self { viewport, cells }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cells(&self) -> &[GridCell; CELL_COUNT] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= WEEKS || col >= DAYS_PER_WEEK {
            return None;
        }
        self.cells.get(row * DAYS_PER_WEEK + col)
    }

    pub fn position_of(&self, date: CalendarDate) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| c.date == date)
            .map(|i| (i / DAYS_PER_WEEK, i % DAYS_PER_WEEK))
    }
}

fn mark_selection(cell: &mut GridCell, selection: &Selection, hover: Option<CalendarDate>) {
    let date = cell.date;
    match *selection {
        Selection::Single(selected) => {
            cell.is_start = selected == Some(date);
        }
        Selection::Range { start, end } => {
            cell.is_start = start == Some(date);
            cell.is_end = end == Some(date);
            match (start, end) {
                (Some(s), Some(e)) => {
                    cell.is_in_range = s.min(e) <= date && date <= s.max(e);
                }
                (Some(s), None) => {
                    cell.is_hovered = hover.is_some_and(|h| s.min(h) <= date && date <= s.max(h));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::selection::SelectionMode;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid date")
    }

    fn june_2025() -> Viewport {
        Viewport::new(2025, 6).expect("valid month")
    }

    #[test]
    fn every_month_has_42_cells_covering_the_month() {
        for year in [1999, 2000, 2024, 2025] {
            for month in 1..=12 {
                let vp = Viewport::new(year, month).expect("valid month");
                let grid = CalendarGrid::build(
                    vp,
                    &Selection::empty(SelectionMode::Single),
                    None,
                    &DateBounds::unbounded(),
                );
                assert_eq!(grid.cells().len(), CELL_COUNT);
                assert_eq!(grid.rows().count(), WEEKS);
                let inside = grid.cells().iter().filter(|c| c.in_current_month).count();
                assert_eq!(inside as u32, crate::calendar::math::days_in_month(year, month));
                assert_eq!(grid.cells()[0].date.weekday_from_sunday(), 0);
                for pair in grid.cells().windows(2) {
                    assert_eq!(pair[0].date.add_days(1), pair[1].date);
                }
            }
        }
    }

    #[test]
    fn leading_cells_come_from_previous_month() {
        // June 1st 2025 is a Sunday: no leading cells
        let grid = CalendarGrid::build(
            june_2025(),
            &Selection::empty(SelectionMode::Single),
            None,
            &DateBounds::unbounded(),
        );
        assert_eq!(grid.cells()[0].date, date(2025, 6, 1));
        assert!(grid.cells()[0].in_current_month);

        // May 1st 2025 is a Thursday: four leading April days
        let may = Viewport::new(2025, 5).expect("valid month");
        let grid = CalendarGrid::build(
            may,
            &Selection::empty(SelectionMode::Single),
            None,
            &DateBounds::unbounded(),
        );
        assert_eq!(grid.cells()[0].date, date(2025, 4, 27));
        assert!(!grid.cells()[3].in_current_month);
        assert_eq!(grid.cells()[4].date, date(2025, 5, 1));
        assert_eq!(grid.cells()[41].date, date(2025, 6, 7));
        assert!(!grid.cells()[41].in_current_month);
    }

    #[test]
    fn single_selection_marks_start_only() {
        let sel = Selection::Single(Some(date(2025, 6, 10)));
        let grid = CalendarGrid::build(june_2025(), &sel, None, &DateBounds::unbounded());
        let marked: Vec<_> = grid.cells().iter().filter(|c| c.is_selected()).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, date(2025, 6, 10));
        assert!(marked[0].is_start && !marked[0].is_end && !marked[0].is_in_range);
    }

    #[test]
    fn complete_range_is_inclusive() {
        let sel = Selection::range(date(2025, 6, 10), date(2025, 6, 15));
        let grid = CalendarGrid::build(june_2025(), &sel, None, &DateBounds::unbounded());
        let in_range: Vec<_> = grid
            .cells()
            .iter()
            .filter(|c| c.is_in_range)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(in_range, vec![10, 11, 12, 13, 14, 15]);
        let (row, col) = grid.position_of(date(2025, 6, 10)).expect("visible");
        assert!(grid.cell(row, col).expect("cell").is_start);
        let (row, col) = grid.position_of(date(2025, 6, 15)).expect("visible");
        assert!(grid.cell(row, col).expect("cell").is_end);
    }

    #[test]
    fn single_day_range_is_start_and_end() {
        let sel = Selection::range(date(2025, 6, 10), date(2025, 6, 10));
        let grid = CalendarGrid::build(june_2025(), &sel, None, &DateBounds::unbounded());
        let (row, col) = grid.position_of(date(2025, 6, 10)).expect("visible");
        let cell = grid.cell(row, col).expect("cell");
        assert!(cell.is_start && cell.is_end && cell.is_in_range);
    }

    #[test]
    fn hover_preview_works_in_both_directions() {
        let sel = Selection::Range {
            start: Some(date(2025, 6, 15)),
            end: None,
        };

        let forward = CalendarGrid::build(
            june_2025(),
            &sel,
            Some(date(2025, 6, 17)),
            &DateBounds::unbounded(),
        );
        let hovered: Vec<_> = forward
            .cells()
            .iter()
            .filter(|c| c.is_hovered)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(hovered, vec![15, 16, 17]);

        let backward = CalendarGrid::build(
            june_2025(),
            &sel,
            Some(date(2025, 6, 13)),
            &DateBounds::unbounded(),
        );
        let hovered: Vec<_> = backward
            .cells()
            .iter()
            .filter(|c| c.is_hovered)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(hovered, vec![13, 14, 15]);
    }

    #[test]
    fn hover_is_ignored_once_range_is_complete() {
        let sel = Selection::range(date(2025, 6, 10), date(2025, 6, 12));
        let grid = CalendarGrid::build(
            june_2025(),
            &sel,
            Some(date(2025, 6, 20)),
            &DateBounds::unbounded(),
        );
        assert!(grid.cells().iter().all(|c| !c.is_hovered));
    }

    #[test]
    fn out_of_bounds_cells_are_disabled() {
        let bounds = DateBounds::new(Some(date(2025, 5, 1)), Some(date(2025, 7, 31)));
        let may = Viewport::new(2025, 5).expect("valid month");
        let grid = CalendarGrid::build(
            may,
            &Selection::empty(SelectionMode::Single),
            None,
            &bounds,
        );
        let (row, col) = grid.position_of(date(2025, 4, 30)).expect("visible");
        assert!(grid.cell(row, col).expect("cell").is_disabled);
        let (row, col) = grid.position_of(date(2025, 5, 1)).expect("visible");
        assert!(!grid.cell(row, col).expect("cell").is_disabled);
    }

    #[test]
    fn viewport_navigation_wraps_years() {
        let dec = Viewport::new(2024, 12).expect("valid month");
        assert_eq!(dec.next(), Viewport::new(2025, 1).expect("valid month"));
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(dec.title(), "December 2024");
        assert!(Viewport::new(2024, 13).is_none());
    }
}
