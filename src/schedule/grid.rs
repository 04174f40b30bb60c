//! Calendar month grid generation
//!
//! Produces the day grid backing the date-picker: leading empty cells up to
//! the weekday of day 1, then the days of the month.

use chrono::{Datelike, NaiveDate};

/// Number of days in `(year, month)`, month being 1-12.
///
/// Returns `None` for an invalid month or a year outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// Generate the day grid for `(year, month)`, month being 1-12.
///
/// The grid starts with one `None` cell per weekday preceding day 1
/// (0 = Sunday), followed by `Some(1..=days_in_month)`. There is no trailing
/// padding. Deterministic for any valid input, including year rollover.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Option<u32>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(None).take(leading));
    cells.extend((1..=days).map(Some));
    Some(cells)
}
