use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Sorted, deduplicated BaseFont names referenced from every page's `/Resources` `/Font` dictionary
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .get_pages()
        .values()
        .filter_map(|page_id| doc.get_dictionary(*page_id).ok())
        .filter_map(|page| resolve_dict(doc, page.get(b"Resources").ok()?))
        .filter_map(|resources| resolve_dict(doc, resources.get(b"Font").ok()?))
        .flat_map(|font_dict| {
            font_dict
                .iter()
                .filter_map(|(_, font)| resolve_dict(doc, font))
                .filter_map(|font| font.get(b"BaseFont").ok()?.as_name().ok())
                .map(|name| String::from_utf8_lossy(name).to_string())
                .collect::<Vec<_>>()
        })
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Follows a reference if needed and returns the dictionary behind `object`
pub fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => object.as_dict().ok(),
    }
}

/// Get page dimensions (width, height) in points for a specific page (1-based)
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let media_box = doc.get_dictionary(page_id).ok()?.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() != 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// Document title from the Info dictionary
pub fn document_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let title = doc.get_dictionary(info_id).ok()?.get(b"Title").ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(title).to_string())
}

/// Assert page dimensions match expected values (with tolerance)
pub fn assert_page_dimensions(doc: &LopdfDocument, page_num: u32, expected_width: f32, expected_height: f32) {
    let (width, height) = get_page_dimensions(doc, page_num)
        .unwrap_or_else(|| panic!("Could not get dimensions for page {}", page_num));
    let tolerance = 1.0;
    assert!(
        (width - expected_width).abs() < tolerance && (height - expected_height).abs() < tolerance,
        "Page {} is {}x{}, expected {}x{}",
        page_num,
        width,
        height,
        expected_width,
        expected_height
    );
}
