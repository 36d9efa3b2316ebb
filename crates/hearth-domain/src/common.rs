//! Shared traits and the calendar-month key used across budgeting primitives.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities handed to the core.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// A calendar month acting as a first-class key.
///
/// The wire form is the `YYYY-MM` string; because the year is zero-padded to
/// four digits, lexicographic ordering of the wire form is chronological, and
/// the derived `Ord` on `(year, month)` agrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(MonthKeyError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Parses the strict `YYYY-MM` wire form.
    pub fn parse(input: &str) -> Result<Self, MonthKeyError> {
        let malformed = || MonthKeyError::Malformed(input.to_string());
        let (year, month) = input.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        // `parse` alone would accept a leading sign, e.g. "+202-08".
        if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month (UTC).
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// The previous calendar month, carrying across January.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month, carrying across December.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable label, e.g. `Jan. 2026`.
    pub fn label(&self) -> String {
        self.first_day().format("%b. %Y").to_string()
    }

    fn first_day(&self) -> NaiveDate {
        // Fields are range-checked at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::parse(&input)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when constructing [`MonthKey`] values.
pub enum MonthKeyError {
    Malformed(String),
    MonthOutOfRange(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::Malformed(input) => {
                write!(f, "month key `{input}` does not match YYYY-MM")
            }
            MonthKeyError::MonthOutOfRange(month) => {
                write!(f, "month {month} is outside 01..=12")
            }
            MonthKeyError::YearOutOfRange(year) => {
                write!(f, "year {year} cannot be zero-padded to four digits")
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}
