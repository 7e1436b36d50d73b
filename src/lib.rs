//! Year-at-a-glance PDF calendars.
//!
//! ```no_run
//! use calsheet::CalendarBuilder;
//!
//! let grid = CalendarBuilder::new().with_year(2024).build().generate_to_file("calendar.pdf")?;
//! assert_eq!(grid.non_empty_count(1), 29);
//! # Ok::<(), calsheet::CalendarError>(())
//! ```

mod builder;
mod error;

pub use builder::{CalendarBuilder, CalendarGenerator};
pub use error::CalendarError;

pub use calsheet_grid::{build_grid, Cell, CellRef, CalendarGrid, GridError, HighlightKind};
pub use calsheet_render_lopdf::{LopdfRenderer, RenderError};
pub use calsheet_style::{CalendarStyle, Locale, StyleError};
