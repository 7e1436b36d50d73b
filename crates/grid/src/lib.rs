//! Year-at-a-glance calendar grid.
//!
//! [`build_grid`] lays out every month of a year as a column of formatted day
//! cells (`"5  We"`), padded to 31 rows, under a header row of month names.
//! Month names and weekday codes come from an injected [`Locale`].

pub mod cell;
pub mod error;
pub mod grid;
pub mod highlight;
pub mod month;

pub use calsheet_style::Locale;
pub use cell::{format_day, Cell, CellRef};
pub use error::GridError;
pub use grid::{build_grid, month_column, CalendarGrid, DAY_ROWS, GRID_COLUMNS, GRID_ROWS};
pub use highlight::{HighlightKind, Highlights};
pub use month::{days_in_month, ensure_year_supported, month_layout, Day, Week, WEEKDAYS};
