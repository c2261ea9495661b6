//! "Added" dates as stored in the catalog: year, English month name, day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Full English month names, indexed from zero
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("Not a calendar date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: String, day: u32 },
}

/// Zero-based month index for a full English month name.
///
/// Matching is exact: abbreviations and other casings are not months.
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedDate {
    pub month: String,
    pub day: u32,
    pub year: i32,
}

impl AddedDate {
    /// Rebuild the calendar date from its decomposed parts
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        let index = month_index(&self.month)
            .ok_or_else(|| DateError::UnknownMonth(self.month.clone()))?;

        NaiveDate::from_ymd_opt(self.year, index + 1, self.day).ok_or_else(|| {
            DateError::InvalidDate {
                year: self.year,
                month: self.month.clone(),
                day: self.day,
            }
        })
    }
}
