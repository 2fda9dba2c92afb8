//! Rental records and the fixed calendar-date encoding.
//!
//! # Responsibility
//! - Define the ledger entry linking one copy to one reader over a period.
//! - Parse and render dates in the single accepted `DD-MM-YYYY` form.
//!
//! # Invariants
//! - `end == None` means the rental is open (ongoing).
//! - A closed rental never ends before it starts.
//! - Rendered dates always round-trip through `RentalDate::parse`.

use crate::model::ids::{CopyId, ReaderId};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// chrono pattern for the archive date encoding.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Token rendered in place of an end date while a rental is open.
pub const ONGOING: &str = "ONGOING";

// chrono alone accepts unpadded fields such as `1-1-2024`; `\d` would also
// admit non-ASCII digits.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("valid date shape regex"));

/// Date parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalDateError {
    /// Text does not have the `DD-MM-YYYY` shape.
    Malformed(String),
    /// Shape is right but the day does not exist (e.g. `31-02-2024`).
    OutOfRange(String),
}

impl Display for RentalDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "date `{value}` is not in DD-MM-YYYY format"),
            Self::OutOfRange(value) => write!(f, "date `{value}` is not a valid calendar day"),
        }
    }
}

impl Error for RentalDateError {}

/// Calendar day used for rental start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RentalDate(NaiveDate);

impl RentalDate {
    /// Parses `DD-MM-YYYY` text.
    ///
    /// # Errors
    /// - `Malformed` when the text is not two digits, hyphen, two digits,
    ///   hyphen, four digits (surrounding whitespace is ignored).
    /// - `OutOfRange` when the fields do not name a real day.
    pub fn parse(value: &str) -> Result<Self, RentalDateError> {
        let trimmed = value.trim();
        if !DATE_SHAPE_RE.is_match(trimmed) {
            return Err(RentalDateError::Malformed(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| RentalDateError::OutOfRange(trimmed.to_string()))
    }

    /// Builds a date from calendar fields, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Display for RentalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for RentalDate {
    type Err = RentalDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<RentalDate> for String {
    fn from(value: RentalDate) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for RentalDate {
    type Error = RentalDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// One ledger entry: a copy lent to a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub copy_id: CopyId,
    pub reader_id: ReaderId,
    pub start: RentalDate,
    /// `None` while the copy is still out.
    pub end: Option<RentalDate>,
}

impl RentalRecord {
    /// Opens a new rental.
    pub fn open(copy_id: CopyId, reader_id: ReaderId, start: RentalDate) -> Self {
        Self {
            copy_id,
            reader_id,
            start,
            end: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Renders `"<start> <end>"`, with `ONGOING` for an open rental.
    pub fn period_label(&self) -> String {
        match self.end {
            Some(end) => format!("{} {}", self.start, end),
            None => format!("{} {ONGOING}", self.start),
        }
    }
}
