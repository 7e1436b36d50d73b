//! Lengths, margins and page geometry. All values are stored in PDF points.
use serde::{de, Deserialize, Deserializer, Serialize};

pub const PT_PER_INCH: f32 = 72.0;
pub const PT_PER_CM: f32 = PT_PER_INCH / 2.54;
pub const PT_PER_MM: f32 = PT_PER_CM / 10.0;

/// A length in points. Deserializes from a bare number (points) or a string with a unit.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Length(pub f32);

impl Length {
    pub fn pt(value: f32) -> Self {
        Length(value)
    }

    pub fn cm(value: f32) -> Self {
        Length(value * PT_PER_CM)
    }

    pub fn mm(value: f32) -> Self {
        Length(value * PT_PER_MM)
    }

    pub fn points(self) -> f32 {
        self.0
    }

    /// Parse a CSS-style length value with optional unit (e.g., "10pt", "5mm", "1cm", "12")
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        let number = |val: &str| {
            val.trim()
                .parse::<f32>()
                .map_err(|e| format!("Invalid number '{}': {}", val.trim(), e))
        };

        if let Some(val) = input.strip_suffix("pt") {
            return number(val).map(Length);
        }
        if let Some(val) = input.strip_suffix("in") {
            return number(val).map(|v| Length(v * PT_PER_INCH));
        }
        if let Some(val) = input.strip_suffix("cm") {
            return number(val).map(Length::cm);
        }
        if let Some(val) = input.strip_suffix("mm") {
            return number(val).map(Length::mm);
        }

        // No unit, assume points
        number(input).map(Length)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Num(f32),
            Str(String),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Num(v) => Ok(Length(v)),
            LengthDef::Str(s) => Length::parse(&s).map_err(de::Error::custom),
        }
    }
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(|part| Length::parse(part).map(Length::points))
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [y, x] => Ok(Margins {
                top: *y,
                right: *x,
                bottom: *y,
                left: *x,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Num(f32),
            Str(String),
            Map {
                #[serde(default)]
                top: Length,
                #[serde(default)]
                right: Length,
                #[serde(default)]
                bottom: Length,
                #[serde(default)]
                left: Length,
            },
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Num(v) => Ok(Margins::all(v)),
            MarginsDef::Str(s) => Margins::parse_shorthand(&s).map_err(de::Error::custom),
            MarginsDef::Map {
                top,
                right,
                bottom,
                left,
            } => Ok(Margins {
                top: top.points(),
                right: right.points(),
                bottom: bottom.points(),
                left: left.points(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Portrait (width, height) in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: Length, height: Length },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom {
                width: width.points(),
                height: height.points(),
            }),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Orients portrait dimensions, swapping them for landscape when needed.
    pub fn apply(&self, (width, height): (f32, f32)) -> (f32, f32) {
        let (short, long) = if width <= height {
            (width, height)
        } else {
            (height, width)
        };
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}
