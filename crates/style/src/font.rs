use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The subset of the PDF standard Type1 fonts available without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardFont {
    #[default]
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

impl StandardFont {
    /// The PostScript name written as `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    pub fn is_monospaced(&self) -> bool {
        matches!(
            self,
            StandardFont::Courier
                | StandardFont::CourierBold
                | StandardFont::CourierOblique
                | StandardFont::CourierBoldOblique
        )
    }

    /// Average glyph advance as a fraction of the font size.
    ///
    /// Exact for the Courier family (every glyph is 600/1000 em); an
    /// approximation for the proportional faces.
    pub fn char_width_em(&self) -> f32 {
        if self.is_monospaced() { 0.6 } else { 0.5 }
    }

    /// Approximate rendered width of `text` at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width_em() * size
    }

    fn parse(s: &str) -> Result<Self, String> {
        let all = [
            StandardFont::Courier,
            StandardFont::CourierBold,
            StandardFont::CourierOblique,
            StandardFont::CourierBoldOblique,
            StandardFont::Helvetica,
            StandardFont::HelveticaBold,
            StandardFont::TimesRoman,
            StandardFont::TimesBold,
        ];
        all.into_iter()
            .find(|font| font.base_font().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported font: '{}'", s))
    }
}

impl Serialize for StandardFont {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.base_font())
    }
}

impl<'de> Deserialize<'de> for StandardFont {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
