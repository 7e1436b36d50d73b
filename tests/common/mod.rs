pub mod fixtures;
pub mod pdf_assertions;

use calsheet::{CalendarBuilder, CalendarError, CalendarGrid, CalendarStyle};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub grid: CalendarGrid,
}

impl GeneratedPdf {
    pub fn from_parts(bytes: Vec<u8>, grid: CalendarGrid) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc, grid })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a calendar in memory with the given style.
pub fn generate_calendar(year: i32, style: CalendarStyle) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let mut bytes = Vec::new();
    let grid = CalendarBuilder::new()
        .with_year(year)
        .with_style(style)
        .build()
        .generate(&mut bytes)?;
    GeneratedPdf::from_parts(bytes, grid)
}

/// Generate a calendar from a JSON style document.
pub fn generate_calendar_from_json(year: i32, style: &serde_json::Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let style = CalendarStyle::from_json(&serde_json::to_string(style)?).map_err(CalendarError::from)?;
    generate_calendar(year, style)
}
