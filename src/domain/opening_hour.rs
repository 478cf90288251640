// Copyright (c) 2025 - Cowboy AI, Inc.
//! Opening Hour Value Object
//!
//! One opening window on one day of the week. A restaurant keeps an ordered
//! list of these; no overlap or completeness rule applies across entries.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{messages, DomainError, LogicalConstraintError, Violations};

/// Canonical day names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when text is not a canonical day name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0}")]
pub struct UnknownDay(pub String);

impl FromStr for DayOfWeek {
    type Err = UnknownDay;

    /// Full day names only, any case (`monday`, `MONDAY`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// Opening window for one day
///
/// # Invariants
/// - day of week is a canonical day name
/// - end is strictly after start (checked after the field rules)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OpeningHour {
    day_of_week: DayOfWeek,
    start: NaiveTime,
    end: NaiveTime,
}

impl OpeningHour {
    /// Create a validated opening hour
    pub fn new(day_of_week: &str, start: NaiveTime, end: NaiveTime) -> Result<Self, DomainError> {
        let mut violations = Violations::new();
        match violations.member::<DayOfWeek>("day_of_week", day_of_week, messages::DAY_OF_WEEK) {
            Some(day) => Self::from_parts(day, start, end),
            None => Err(violations.into_error().into()),
        }
    }

    /// Create an opening hour from an already typed day
    pub fn from_parts(day_of_week: DayOfWeek, start: NaiveTime, end: NaiveTime) -> Result<Self, DomainError> {
        if end <= start {
            return Err(LogicalConstraintError::new("end", messages::END_AFTER_START).into());
        }

        Ok(Self {
            day_of_week,
            start,
            end,
        })
    }

    /// Create an opening hour from text times (`HH:MM` or `HH:MM:SS`)
    pub fn parse(day_of_week: &str, start: &str, end: &str) -> Result<Self, DomainError> {
        let mut violations = Violations::new();
        let day = violations.member::<DayOfWeek>("day_of_week", day_of_week, messages::DAY_OF_WEEK);
        let start = parse_time(&mut violations, "start", start);
        let end = parse_time(&mut violations, "end", end);

        match (day, start, end) {
            (Some(day), Some(start), Some(end)) if violations.is_empty() => {
                Self::from_parts(day, start, end)
            }
            _ => Err(violations.into_error().into()),
        }
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

fn parse_time(violations: &mut Violations, field: &str, raw: &str) -> Option<NaiveTime> {
    if raw.is_empty() {
        violations.push(field, messages::REQUIRED);
        return None;
    }

    let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok();
    if parsed.is_none() {
        violations.push(field, messages::TIME_OF_DAY);
    }
    parsed
}

impl fmt::Display for OpeningHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day_of_week,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
