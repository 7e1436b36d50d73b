//! PDF renderer for calsheet calendar grids using lopdf.
//!
//! The table layout is fixed: one header row of month names and one row per
//! day of month, with standard Type1 fonts so nothing is embedded.

mod error;
mod layout;
mod page;
mod renderer;

pub use error::RenderError;
pub use layout::{PagePlan, PlacedCell, PlacedRow, PlacedText, Rect, TableLayout, TextAlign};
pub use renderer::LopdfRenderer;
