use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The year has dates outside the range `chrono::NaiveDate` can represent.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange { year: i32 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },
}
