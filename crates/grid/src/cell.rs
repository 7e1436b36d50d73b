use calsheet_style::Locale;
use chrono::Weekday;

/// A `(column, row)` coordinate in the grid. Column 0 is January, row 0 is the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub column: usize,
    pub row: usize,
}

impl CellRef {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// One grid entry. Day cells carry their weekday so presentation never has
/// to re-derive it from the formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Header(String),
    Day {
        day: u32,
        weekday: Weekday,
        text: String,
    },
    Empty,
}

impl Cell {
    pub fn day(day: u32, weekday: Weekday, locale: &Locale) -> Self {
        Cell::Day {
            day,
            weekday,
            text: format_day(day, weekday, locale),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Cell::Header(name) => name,
            Cell::Day { text, .. } => text,
            Cell::Empty => "",
        }
    }

    pub fn day_of_month(&self) -> Option<u32> {
        match self {
            Cell::Day { day, .. } => Some(*day),
            _ => None,
        }
    }

    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            Cell::Day { weekday, .. } => Some(*weekday),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Day number left-justified to width 2, a space, then the weekday code: `"5  We"`.
pub fn format_day(day: u32, weekday: Weekday, locale: &Locale) -> String {
    let code = locale.weekday_code(weekday.num_days_from_monday() as usize);
    format!("{:<2} {}", day, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_days() {
        let en = Locale::english();
        assert_eq!(format_day(1, Weekday::Mon, &en), "1  Mo");
        assert_eq!(format_day(5, Weekday::Wed, &en), "5  We");
        assert_eq!(format_day(12, Weekday::Sat, &en), "12 Sa");
        assert_eq!(format_day(31, Weekday::Sun, &en), "31 Su");
    }

    #[test]
    fn uses_the_injected_locale() {
        let de = Locale::by_code("de").unwrap();
        assert_eq!(format_day(3, Weekday::Thu, &de), "3  Do");
    }

    #[test]
    fn text_of_each_variant() {
        let en = Locale::english();
        assert_eq!(Cell::Header("May".into()).text(), "May");
        assert_eq!(Cell::day(9, Weekday::Fri, &en).text(), "9  Fr");
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.weekday(), None);
        assert_eq!(Cell::day(9, Weekday::Fri, &en).day_of_month(), Some(9));
    }
}
