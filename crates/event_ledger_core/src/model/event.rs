//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical calendar date used by every stored event.
//! - Define the immutable `Event` record and its validation errors.
//!
//! # Invariants
//! - An `EventDate` always denotes a real Gregorian day in years `1..=9999`.
//! - An `Event` description is trimmed and never empty.
//! - `Event` exposes no mutators; fields are read through accessors only.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every recorded event.
pub type EventId = Uuid;

/// Smallest accepted year.
pub const MIN_YEAR: i64 = 1;
/// Largest accepted year. Keeps the ISO form at exactly four year digits.
pub const MAX_YEAR: i64 = 9999;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));

/// Which calendar constraint a rejected date violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateViolation {
    /// Year is not within `MIN_YEAR..=MAX_YEAR`.
    YearOutOfRange,
    /// Month is not within `1..=12`.
    MonthOutOfRange,
    /// Day is zero, negative, or past the last day of the month.
    DayOutOfRange { max_day: u32 },
    /// Text input is not shaped like `YYYY-MM-DD`.
    MalformedIso(String),
}

/// Validation errors raised before an event reaches the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// `year`/`month`/`day` do not form a real calendar day.
    InvalidDate {
        year: i64,
        month: i64,
        day: i64,
        reason: DateViolation,
    },
    /// Description is empty or whitespace-only.
    InvalidDescription,
}

impl EventValidationError {
    /// Stable short name used in log lines and tool responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDate { .. } => "invalid_date",
            Self::InvalidDescription => "invalid_description",
        }
    }
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate {
                year,
                month,
                day,
                reason,
            } => match reason {
                DateViolation::YearOutOfRange => write!(
                    f,
                    "invalid date: year {year} must be between {MIN_YEAR} and {MAX_YEAR}"
                ),
                DateViolation::MonthOutOfRange => {
                    write!(f, "invalid date: month {month} must be between 1 and 12")
                }
                DateViolation::DayOutOfRange { max_day } => write!(
                    f,
                    "invalid date: day {day} must be between 1 and {max_day} for {year:04}-{month:02}"
                ),
                DateViolation::MalformedIso(text) => {
                    write!(f, "invalid date: `{text}` is not formatted as YYYY-MM-DD")
                }
            },
            Self::InvalidDescription => {
                write!(f, "invalid description: must not be empty or whitespace-only")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Returns the number of days in `month` of `year`, or `None` for a month
/// outside `1..=12`.
pub fn days_in_month(year: i64, month: i64) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Canonical calendar date of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Builds a date from caller-supplied integers.
    ///
    /// Checks run year, then month, then day, and the first failing field is
    /// reported.
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self, EventValidationError> {
        let invalid = |reason| EventValidationError::InvalidDate {
            year,
            month,
            day,
            reason,
        };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid(DateViolation::YearOutOfRange));
        }
        let max_day =
            days_in_month(year, month).ok_or_else(|| invalid(DateViolation::MonthOutOfRange))?;
        if day < 1 || day > i64::from(max_day) {
            return Err(invalid(DateViolation::DayOutOfRange { max_day }));
        }

        // Ranges are checked above, so the narrowing casts are lossless.
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .map(Self)
            .ok_or_else(|| invalid(DateViolation::DayOutOfRange { max_day }))
    }

    /// Parses a zero-padded `YYYY-MM-DD` string.
    pub fn parse_iso(text: &str) -> Result<Self, EventValidationError> {
        let malformed = || EventValidationError::InvalidDate {
            year: 0,
            month: 0,
            day: 0,
            reason: DateViolation::MalformedIso(text.to_string()),
        };
        let captures = ISO_DATE_RE.captures(text.trim()).ok_or_else(malformed)?;
        let field = |index: usize| -> Result<i64, EventValidationError> {
            captures[index].parse::<i64>().map_err(|_| malformed())
        };

        Self::from_ymd(field(1)?, field(2)?, field(3)?)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Underlying chrono value for callers doing date arithmetic.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl TryFrom<String> for EventDate {
    type Error = EventValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl From<EventDate> for String {
    fn from(value: EventDate) -> Self {
        value.to_string()
    }
}

/// One stored reminder.
///
/// Serialized as `{"id", "description", "date"}` with `date` in ISO form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventWire")]
pub struct Event {
    id: EventId,
    description: String,
    date: EventDate,
}

#[derive(Deserialize)]
struct EventWire {
    id: EventId,
    description: String,
    date: EventDate,
}

impl TryFrom<EventWire> for Event {
    type Error = EventValidationError;

    fn try_from(value: EventWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.description.as_str(), value.date)
    }
}

impl Event {
    /// Creates an event with a generated id.
    ///
    /// # Errors
    /// - `InvalidDescription` when `description` trims to an empty string.
    pub fn new(description: &str, date: EventDate) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), description, date)
    }

    /// Creates an event with a caller-provided id.
    ///
    /// Used when rebuilding events from their serialized form.
    pub fn with_id(
        id: EventId,
        description: &str,
        date: EventDate,
    ) -> Result<Self, EventValidationError> {
        let description = normalize_description(description)?;
        Ok(Self {
            id,
            description,
            date,
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> EventDate {
        self.date
    }
}

/// Trims a description and rejects blank input.
pub fn normalize_description(description: &str) -> Result<String, EventValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(EventValidationError::InvalidDescription);
    }
    Ok(trimmed.to_string())
}
