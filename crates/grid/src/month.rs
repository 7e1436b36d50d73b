//! Week-aligned month layouts.

use crate::error::GridError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Weekdays indexed from Monday.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One slot of a week-aligned month. `day` is `None` for filler slots that
/// belong to the previous or next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub day: Option<u32>,
    pub weekday: Weekday,
}

impl Day {
    pub fn is_filler(&self) -> bool {
        self.day.is_none()
    }
}

pub type Week = [Day; 7];

fn check_month(month: u32) -> Result<(), GridError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(GridError::InvalidMonth { month })
    }
}

/// Fails unless every date of `year` is representable.
pub fn ensure_year_supported(year: i32) -> Result<(), GridError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(GridError::YearOutOfRange { year }),
    }
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, GridError> {
    check_month(month)?;
    ensure_year_supported(year)?;
    Ok(match month {
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    })
}

/// Lays out `month` of `year` as full weeks starting on `first_weekday`.
///
/// Leading and trailing slots that fall outside the month are filler days.
/// Only their weekday is known; no dates of adjacent months are computed, so
/// the first and last supported years lay out like any other.
pub fn month_layout(year: i32, month: u32, first_weekday: Weekday) -> Result<Vec<Week>, GridError> {
    let len = days_in_month(year, month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(GridError::YearOutOfRange { year })?;

    let start = first_weekday.num_days_from_monday();
    let lead = (first.weekday().num_days_from_monday() + 7 - start) % 7;
    let slots = (lead + len).div_ceil(7) * 7;

    let days: Vec<Day> = (0..slots)
        .map(|slot| Day {
            day: (lead..lead + len).contains(&slot).then(|| slot - lead + 1),
            weekday: WEEKDAYS[((start + slot) % 7) as usize],
        })
        .collect();

    Ok(days
        .chunks_exact(7)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6]])
        .collect())
}
