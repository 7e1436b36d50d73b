//! The top-level presentation settings for a rendered calendar.
//!
//! Every field has a default, so a style file only needs to name what it changes:
//!
//! ```json
//! { "locale": "de", "fills": { "sunday": "#f4cccc" }, "page": { "margins": "1.5cm" } }
//! ```

use crate::color::Color;
use crate::dimension::{Length, Margins, Orientation, PageSize, PT_PER_CM};
use crate::error::StyleError;
use crate::font::StandardFont;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarStyle {
    pub page: PageLayout,
    pub title: TitleStyle,
    pub table: TableStyle,
    pub fills: HighlightFills,
    pub locale: Locale,
}

impl CalendarStyle {
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        log::debug!("Loading calendar style from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageLayout {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Landscape,
            margins: Margins::all(PT_PER_CM),
        }
    }
}

impl PageLayout {
    /// Final page (width, height) in points after orientation.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        self.orientation.apply(self.size.dimensions_pt())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleStyle {
    pub font: StandardFont,
    pub font_size: f32,
    pub leading: f32,
    pub space_after: Length,
    pub color: Color,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            font: StandardFont::CourierBold,
            font_size: 18.0,
            leading: 22.0,
            space_after: Length::cm(0.5),
            color: Color::BLACK,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    pub column_width: Length,
    pub header_row_height: Length,
    pub row_height: Length,
    pub padding: Length,
    pub body_font: StandardFont,
    pub body_font_size: f32,
    pub header_font: StandardFont,
    pub header_font_size: f32,
    pub text_color: Color,
    pub grid_width: Length,
    pub grid_color: Color,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            column_width: Length::cm(2.2),
            header_row_height: Length::cm(0.75),
            row_height: Length::cm(0.5),
            padding: Length::pt(3.0),
            body_font: StandardFont::Courier,
            body_font_size: 8.0,
            header_font: StandardFont::CourierBold,
            header_font_size: 10.0,
            text_color: Color::BLACK,
            grid_width: Length::pt(0.25),
            grid_color: Color::BLACK,
        }
    }
}

/// Background colors for highlighted cells.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightFills {
    pub empty: Color,
    pub saturday: Color,
    pub sunday: Color,
}

impl Default for HighlightFills {
    fn default() -> Self {
        Self {
            empty: Color::LIGHT_GREY,
            saturday: Color::POWDER_BLUE,
            sunday: Color::LIGHT_STEEL_BLUE,
        }
    }
}
