use serde_json::{json, Value};

/// A style that changes every highlight color and the locale.
pub fn german_pastel_style() -> Value {
    json!({
        "locale": "de",
        "fills": {
            "empty": "#eeeeee",
            "saturday": "#d9ead3",
            "sunday": { "r": 244, "g": 204, "b": 204 }
        }
    })
}

/// A Letter portrait page whose rows no longer fit on one sheet.
pub fn tall_portrait_style() -> Value {
    json!({
        "page": { "size": "Letter", "orientation": "portrait", "margins": "0.5in" },
        "table": { "columnWidth": "1.5cm", "rowHeight": "1cm" }
    })
}

/// A custom page size given as a width/height map.
pub fn wide_banner_style() -> Value {
    json!({
        "page": { "size": { "width": "60cm", "height": "30cm" }, "margins": "2cm 1cm" },
        "title": { "fontSize": 24, "leading": 28 },
        "table": { "columnWidth": "4.5cm", "bodyFont": "Helvetica", "headerFont": "Helvetica-Bold" }
    })
}
