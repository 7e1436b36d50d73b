// src/builder.rs
use crate::error::CalendarError;
use calsheet_grid::{build_grid, CalendarGrid};
use calsheet_render_lopdf::LopdfRenderer;
use calsheet_style::{CalendarStyle, Locale};
use chrono::Datelike;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// A builder for creating a `CalendarGenerator`.
///
/// Without any configuration this produces the current year's calendar with
/// the default style and English month names.
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    year: Option<i32>,
    style: Option<CalendarStyle>,
    locale: Option<Locale>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_style(mut self, style: CalendarStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Loads the style from a JSON file. Fields missing from the file keep their defaults.
    pub fn with_style_file<P: AsRef<Path>>(self, path: P) -> Result<Self, CalendarError> {
        let style = CalendarStyle::from_file(path)?;
        Ok(self.with_style(style))
    }

    /// Overrides the locale carried by the style, whichever order the two are set in.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Selects one of the built-in locales by code (`en`, `de`, `fr`, `es`).
    pub fn with_locale_code(self, code: &str) -> Result<Self, CalendarError> {
        let locale = Locale::by_code(code)?;
        Ok(self.with_locale(locale))
    }

    pub fn build(self) -> CalendarGenerator {
        let year = self.year.unwrap_or_else(current_year);
        let mut style = self.style.unwrap_or_default();
        if let Some(locale) = self.locale {
            style.locale = locale;
        }
        CalendarGenerator { year, renderer: LopdfRenderer::new(style) }
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Computes a year's grid and writes it out as a PDF.
#[derive(Debug, Clone)]
pub struct CalendarGenerator {
    year: i32,
    renderer: LopdfRenderer,
}

impl CalendarGenerator {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn style(&self) -> &CalendarStyle {
        self.renderer.style()
    }

    pub fn grid(&self) -> Result<CalendarGrid, CalendarError> {
        Ok(build_grid(self.year, &self.style().locale)?)
    }

    /// Renders the calendar into `writer`, returning the grid that was drawn.
    pub fn generate<W: Write>(&self, writer: W) -> Result<CalendarGrid, CalendarError> {
        let grid = self.grid()?;
        self.renderer.render(&grid, writer)?;
        Ok(grid)
    }

    /// Renders the calendar to `path`, replacing any existing file.
    ///
    /// The grid is computed before the file is created, so an unsupported year
    /// leaves the filesystem untouched.
    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<CalendarGrid, CalendarError> {
        let output_path = path.as_ref();
        let grid = self.grid()?;
        let file = fs::File::create(output_path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to create '{}': {}", output_path.display(), e))
        })?;
        self.renderer.render(&grid, io::BufWriter::new(file))?;
        log::debug!("Wrote {}", output_path.display());
        Ok(grid)
    }
}
