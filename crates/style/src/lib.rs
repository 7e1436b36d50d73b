pub mod color;
pub mod dimension;
pub mod error;
pub mod font;
pub mod locale;
pub mod stylesheet;

pub use color::Color;
pub use dimension::{Length, Margins, Orientation, PageSize, PT_PER_CM, PT_PER_MM};
pub use error::StyleError;
pub use font::StandardFont;
pub use locale::{Locale, DAYS_PER_WEEK, MONTHS_PER_YEAR, WEEKDAY_CODE_LEN};
pub use stylesheet::{CalendarStyle, HighlightFills, PageLayout, TableStyle, TitleStyle};
