// src/error.rs
use calsheet_grid::GridError;
use calsheet_render_lopdf::RenderError;
use calsheet_style::StyleError;
use thiserror::Error;

/// A comprehensive error type for building and rendering a calendar.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Calendar computation failed: {0}")]
    Grid(#[from] GridError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Style is invalid: {0}")]
    Style(#[from] StyleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
