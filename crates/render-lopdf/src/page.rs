// Content stream drawing for one planned page.

use crate::layout::{PagePlan, PlacedText, TableLayout};
use calsheet_style::{Color, StandardFont, TableStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(String, f32)>,
    fill_color: Option<Color>,
}

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_map: &'a HashMap<StandardFont, String>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, font_map: &'a HashMap<StandardFont, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            font_map,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    /// Fills first, then grid lines, then text, so lines stay visible over fills.
    pub(crate) fn draw_page(&mut self, layout: &TableLayout, page: &PagePlan, table: &TableStyle) {
        for cell in page.rows.iter().flat_map(|row| &row.cells) {
            if let Some(fill) = cell.fill {
                self.set_fill_color(fill);
                let y = self.page_height - cell.rect.bottom();
                self.push(
                    "re",
                    vec![cell.rect.x.into(), y.into(), cell.rect.width.into(), cell.rect.height.into()],
                );
                self.push("f", vec![]);
            }
        }

        self.draw_grid_lines(layout, page, table);

        if let Some(title) = &page.title {
            self.draw_text(title);
        }
        for text in page.rows.iter().flat_map(|row| &row.cells).filter_map(|c| c.text.as_ref()) {
            self.draw_text(text);
        }
    }

    fn draw_grid_lines(&mut self, layout: &TableLayout, page: &PagePlan, table: &TableStyle) {
        let (Some(first), Some(last)) = (page.rows.first(), page.rows.last()) else {
            return;
        };
        let top = first.y;
        let bottom = last.y + last.height;
        let left = layout.table_x;
        let right = layout.table_x + layout.column_width * layout.columns as f32;

        let [r, g, b] = table.grid_color.to_unit_rgb();
        self.push("w", vec![table.grid_width.points().into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);

        let horizontals = page.rows.iter().map(|row| row.y).chain(std::iter::once(bottom));
        for y in horizontals {
            let pdf_y = self.page_height - y;
            self.push("m", vec![left.into(), pdf_y.into()]);
            self.push("l", vec![right.into(), pdf_y.into()]);
        }
        for column in 0..=layout.columns {
            let x = left + column as f32 * layout.column_width;
            self.push("m", vec![x.into(), (self.page_height - top).into()]);
            self.push("l", vec![x.into(), (self.page_height - bottom).into()]);
        }
        self.push("S", vec![]);
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        let name = self
            .font_map
            .get(&font)
            .cloned()
            .unwrap_or_else(|| "F1".to_string());
        let wanted = Some((name.clone(), size));
        if self.state.font != wanted {
            self.push("Tf", vec![Object::Name(name.into_bytes()), size.into()]);
            self.state.font = wanted;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, text: &PlacedText) {
        if text.text.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(text.font, text.font_size);
        self.set_fill_color(text.color);
        let pdf_y = self.page_height - text.baseline;
        self.push("Td", vec![text.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}

/// Latin-1 approximation of WinAnsiEncoding; anything outside it becomes `?`.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 255 { c as u8 } else { b'?' })
        .collect()
}
