//! Fixed table layout for the calendar page.
//!
//! Coordinates here use a top-left origin in points, like the rest of the
//! layout code; the page drawer flips them into PDF user space.

use crate::error::RenderError;
use calsheet_grid::{CalendarGrid, CellRef, HighlightKind};
use calsheet_style::{CalendarStyle, Color, StandardFont};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single line of text positioned by its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
    pub x: f32,
    pub baseline: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub at: CellRef,
    pub rect: Rect,
    pub fill: Option<Color>,
    pub text: Option<PlacedText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    pub y: f32,
    pub height: f32,
    pub cells: Vec<PlacedCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagePlan {
    pub title: Option<PlacedText>,
    pub rows: Vec<PlacedRow>,
}

/// Every page of the calendar, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub table_x: f32,
    pub column_width: f32,
    pub columns: usize,
    pub pages: Vec<PagePlan>,
}

/// Baseline offset from the top of a box that vertically centres a line of `size`.
fn centred_baseline(top: f32, height: f32, size: f32) -> f32 {
    top + (height - size) / 2.0 + size * 0.8
}

fn require_positive(name: &str, value: f32) -> Result<f32, RenderError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(RenderError::Layout(format!("{} must be positive, got {}", name, value)))
    }
}

impl TableLayout {
    pub fn compute(grid: &CalendarGrid, style: &CalendarStyle) -> Result<Self, RenderError> {
        let (page_width, page_height) = style.page.dimensions_pt();
        let margins = &style.page.margins;
        let frame_width = require_positive("frame width", page_width - margins.left - margins.right)?;
        let frame_height = require_positive("frame height", page_height - margins.top - margins.bottom)?;
        let frame_top = margins.top;
        let frame_bottom = frame_top + frame_height;

        let table = &style.table;
        let column_width = require_positive("column width", table.column_width.points())?;
        let header_height = require_positive("header row height", table.header_row_height.points())?;
        let row_height = require_positive("row height", table.row_height.points())?;
        require_positive("body font size", table.body_font_size)?;
        require_positive("header font size", table.header_font_size)?;
        let padding = table.padding.points().max(0.0);

        let columns = grid.header().len();
        let table_width = column_width * columns as f32;
        if table_width > frame_width {
            log::warn!(
                "Table width {:.1}pt exceeds the frame width {:.1}pt; it will overflow the right margin",
                table_width,
                frame_width
            );
        }
        let table_x = margins.left + ((frame_width - table_width) / 2.0).max(0.0);

        let title_style = &style.title;
        let title_text = format!("Calendar {}", grid.year());
        let title_width = title_style.font.text_width(&title_text, title_style.font_size);
        let title = PlacedText {
            font: title_style.font,
            font_size: title_style.font_size,
            color: title_style.color,
            x: margins.left + (frame_width - title_width) / 2.0,
            baseline: centred_baseline(frame_top, title_style.leading, title_style.font_size),
            text: title_text,
        };

        let mut pages = vec![PagePlan {
            title: Some(title),
            rows: Vec::new(),
        }];
        let mut cursor = frame_top + title_style.leading.max(0.0) + title_style.space_after.points().max(0.0);

        for (row_index, cells) in grid.rows().iter().enumerate() {
            let is_header = row_index == 0;
            let height = if is_header { header_height } else { row_height };
            if height > frame_height {
                return Err(RenderError::Layout(format!(
                    "row height {:.1}pt does not fit the frame height {:.1}pt",
                    height, frame_height
                )));
            }
            if cursor + height > frame_bottom {
                log::debug!("Row {} continues on page {}", row_index, pages.len() + 1);
                pages.push(PagePlan::default());
                cursor = frame_top;
            }

            let (font, font_size, align) = if is_header {
                (table.header_font, table.header_font_size, TextAlign::Center)
            } else {
                (table.body_font, table.body_font_size, TextAlign::Left)
            };

            let placed = cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let at = CellRef::new(column, row_index);
                    let rect = Rect {
                        x: table_x + column as f32 * column_width,
                        y: cursor,
                        width: column_width,
                        height,
                    };
                    let fill = grid.highlights().fill_for(at).map(|kind| match kind {
                        HighlightKind::Empty => style.fills.empty,
                        HighlightKind::Saturday => style.fills.saturday,
                        HighlightKind::Sunday => style.fills.sunday,
                    });
                    let text = (!cell.is_empty()).then(|| {
                        let x = match align {
                            TextAlign::Left => rect.x + padding,
                            TextAlign::Center => {
                                rect.x + (rect.width - font.text_width(cell.text(), font_size)) / 2.0
                            }
                        };
                        PlacedText {
                            text: cell.text().to_string(),
                            font,
                            font_size,
                            color: table.text_color,
                            x,
                            baseline: centred_baseline(rect.y, rect.height, font_size),
                        }
                    });
                    PlacedCell { at, rect, fill, text }
                })
                .collect();

            if let Some(page) = pages.last_mut() {
                page.rows.push(PlacedRow {
                    y: cursor,
                    height,
                    cells: placed,
                });
            }
            cursor += height;
        }

        Ok(TableLayout {
            page_width,
            page_height,
            table_x,
            column_width,
            columns,
            pages,
        })
    }

    /// Every font referenced by the layout, in first-use order.
    pub fn fonts(&self) -> Vec<StandardFont> {
        let mut fonts = Vec::new();
        let texts = self.pages.iter().flat_map(|page| {
            page.title
                .iter()
                .chain(page.rows.iter().flat_map(|row| row.cells.iter().filter_map(|c| c.text.as_ref())))
        });
        for text in texts {
            if !fonts.contains(&text.font) {
                fonts.push(text.font);
            }
        }
        fonts
    }
}
