//! Month names and weekday codes, injected into the grid builder instead of
//! being read from process-wide locale state.

use crate::error::StyleError;
use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const MONTHS_PER_YEAR: usize = 12;
pub const DAYS_PER_WEEK: usize = 7;
/// Day cells are formatted as `"{day:<2} {code}"`, so codes are exactly two characters.
pub const WEEKDAY_CODE_LEN: usize = 2;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    months: Vec<String>,
    /// Monday first.
    weekdays: Vec<String>,
}

static BUILTIN_LOCALES: Lazy<BTreeMap<&'static str, Locale>> = Lazy::new(|| {
    let table: [(&str, [&str; MONTHS_PER_YEAR], [&str; DAYS_PER_WEEK]); 4] = [
        (
            "en",
            [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        ),
        (
            "de",
            [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
        ),
        (
            "fr",
            [
                "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août",
                "Septembre", "Octobre", "Novembre", "Décembre",
            ],
            ["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"],
        ),
        (
            "es",
            [
                "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
                "Septiembre", "Octubre", "Noviembre", "Diciembre",
            ],
            ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"],
        ),
    ];

    table
        .into_iter()
        .map(|(code, months, weekdays)| {
            let locale = Locale {
                months: months.iter().map(|m| m.to_string()).collect(),
                weekdays: weekdays.iter().map(|d| d.to_string()).collect(),
            };
            (code, locale)
        })
        .collect()
});

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    /// Builds a locale from 12 month names (January first) and 7 two-character
    /// weekday codes (Monday first).
    pub fn new(months: Vec<String>, weekdays: Vec<String>) -> Result<Self, StyleError> {
        if months.len() != MONTHS_PER_YEAR {
            return Err(StyleError::InvalidLocale(format!(
                "expected {} month names, got {}",
                MONTHS_PER_YEAR,
                months.len()
            )));
        }
        if weekdays.len() != DAYS_PER_WEEK {
            return Err(StyleError::InvalidLocale(format!(
                "expected {} weekday codes, got {}",
                DAYS_PER_WEEK,
                weekdays.len()
            )));
        }
        if let Some(code) = weekdays.iter().find(|d| d.chars().count() != WEEKDAY_CODE_LEN) {
            return Err(StyleError::InvalidLocale(format!(
                "weekday code '{}' must be {} characters",
                code, WEEKDAY_CODE_LEN
            )));
        }
        Ok(Self { months, weekdays })
    }

    pub fn english() -> Self {
        BUILTIN_LOCALES["en"].clone()
    }

    /// Looks up one of the built-in locales by its language code.
    pub fn by_code(code: &str) -> Result<Self, StyleError> {
        BUILTIN_LOCALES
            .get(code.trim().to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| StyleError::UnknownLocale(code.to_string()))
    }

    pub fn builtin_codes() -> impl Iterator<Item = &'static str> {
        BUILTIN_LOCALES.keys().copied()
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Month name for a zero-based month index.
    pub fn month_name(&self, month0: usize) -> &str {
        &self.months[month0]
    }

    /// Weekday code for a zero-based index where 0 is Monday.
    pub fn weekday_code(&self, index_from_monday: usize) -> &str {
        &self.weekdays[index_from_monday]
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LocaleDef {
            Code(String),
            Tables {
                months: Vec<String>,
                weekdays: Vec<String>,
            },
        }

        match LocaleDef::deserialize(deserializer)? {
            LocaleDef::Code(code) => Locale::by_code(&code).map_err(de::Error::custom),
            LocaleDef::Tables { months, weekdays } => {
                Locale::new(months, weekdays).map_err(de::Error::custom)
            }
        }
    }
}
