use crate::cell::{Cell, CellRef};
use crate::error::GridError;
use crate::highlight::Highlights;
use crate::month::{ensure_year_supported, month_layout};
use calsheet_style::{Locale, MONTHS_PER_YEAR};
use chrono::Weekday;

/// The longest month; every column is padded to this many day rows.
pub const DAY_ROWS: usize = 31;
/// Header row plus one row per possible day of month.
pub const GRID_ROWS: usize = DAY_ROWS + 1;
pub const GRID_COLUMNS: usize = MONTHS_PER_YEAR;

/// A year laid out with months as columns and days as rows, plus the
/// highlight classes of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    rows: Vec<Vec<Cell>>,
    highlights: Highlights,
}

impl CalendarGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn header(&self) -> &[Cell] {
        &self.rows[0]
    }

    pub fn month_names(&self) -> Vec<&str> {
        self.header().iter().map(Cell::text).collect()
    }

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.rows.get(at.row).and_then(|row| row.get(at.column))
    }

    /// The day cells of one month (zero-based), without the header.
    pub fn column(&self, month0: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows[1..].iter().filter_map(move |row| row.get(month0))
    }

    pub fn non_empty_count(&self, month0: usize) -> usize {
        self.column(month0).filter(|cell| !cell.is_empty()).count()
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }
}

/// The formatted day cells of one month, padded with empty cells to [`DAY_ROWS`].
pub fn month_column(year: i32, month: u32, locale: &Locale) -> Result<Vec<Cell>, GridError> {
    let mut cells: Vec<Cell> = month_layout(year, month, Weekday::Mon)?
        .iter()
        .flatten()
        .filter_map(|slot| slot.day.map(|day| Cell::day(day, slot.weekday, locale)))
        .collect();
    cells.resize(DAY_ROWS, Cell::Empty);
    Ok(cells)
}

/// Builds the grid for `year`. Pure: the same year and locale always give the same grid.
pub fn build_grid(year: i32, locale: &Locale) -> Result<CalendarGrid, GridError> {
    ensure_year_supported(year)?;

    let columns = (1..=MONTHS_PER_YEAR as u32)
        .map(|month| month_column(year, month, locale))
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(GRID_ROWS);
    rows.push(locale.months().iter().cloned().map(Cell::Header).collect());

    let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    for _ in 0..DAY_ROWS {
        let row = columns
            .iter_mut()
            .map(|column| column.next().unwrap_or(Cell::Empty))
            .collect();
        rows.push(row);
    }

    let highlights = Highlights::classify(&rows);
    log::debug!(
        "Built calendar grid for {}: {} empty, {} Saturday, {} Sunday cells",
        year,
        highlights.empty().len(),
        highlights.saturday().len(),
        highlights.sunday().len()
    );

    Ok(CalendarGrid {
        year,
        rows,
        highlights,
    })
}
