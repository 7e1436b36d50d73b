use crate::error::RenderError;
use crate::layout::TableLayout;
use crate::page::{to_win_ansi, PageContext};
use calsheet_grid::CalendarGrid;
use calsheet_style::{CalendarStyle, StandardFont};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;
use std::io::Write;

const PDF_VERSION: &str = "1.7";

/// Draws a [`CalendarGrid`] as a titled, highlighted table using `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfRenderer {
    style: CalendarStyle,
}

impl LopdfRenderer {
    pub fn new(style: CalendarStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &CalendarStyle {
        &self.style
    }

    pub fn render<W: Write>(&self, grid: &CalendarGrid, mut writer: W) -> Result<(), RenderError> {
        let mut doc = self.build_document(grid)?;
        doc.save_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn render_to_vec(&self, grid: &CalendarGrid) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.render(grid, &mut buffer)?;
        Ok(buffer)
    }

    fn build_document(&self, grid: &CalendarGrid) -> Result<Document, RenderError> {
        let layout = TableLayout::compute(grid, &self.style)?;
        let mut doc = Document::with_version(PDF_VERSION);

        let mut font_map = HashMap::new();
        let mut font_dict = Dictionary::new();
        for (i, font) in layout.fonts().into_iter().enumerate() {
            let internal_name = format!("F{}", i + 1);
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => font.base_font(), "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
            font_map.insert(font, internal_name);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let pages_id = doc.new_object_id();
        let media_box: Vec<Object> = vec![
            0.0_f32.into(),
            0.0_f32.into(),
            layout.page_width.into(),
            layout.page_height.into(),
        ];

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let mut ctx = PageContext::new(layout.page_height, &font_map);
            ctx.draw_page(&layout, page, &self.style.table);
            let content = ctx.finish();
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        let title = format!("Calendar {}", grid.year());
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(&title), StringFormat::Literal),
            "Creator" => Object::string_literal("calsheet"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        log::info!(
            "Rendered {} with {} page(s) using {}",
            title,
            page_ids.len(),
            layout.fonts().iter().map(StandardFont::base_font).collect::<Vec<_>>().join(", ")
        );
        Ok(doc)
    }
}
