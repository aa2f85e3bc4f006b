//! Value types for a plan's start/end window as the plan form holds it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanTimeError, Result};
use crate::instant::{combine_in, split};

/// One side of a window: the raw date and time field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
}

impl Endpoint {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// Render an instant back into form field values.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        split(instant)
    }

    /// Combine the two fields into an instant in `tz`.
    pub fn to_instant<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>> {
        combine_in(tz, &self.date, &self.time)
    }

    /// A copy of this endpoint with one field replaced.
    pub fn with_field(&self, field: Field, value: &str) -> Self {
        match field {
            Field::Date => Self::new(value, self.time.clone()),
            Field::Time => Self::new(self.date.clone(), value),
        }
    }
}

/// A plan's start and end.
///
/// Windows returned by the reconciler always satisfy `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanWindow {
    pub start: Endpoint,
    pub end: Endpoint,
}

impl PlanWindow {
    pub fn new(start: Endpoint, end: Endpoint) -> Self {
        Self { start, end }
    }

    /// Build a window from two instants, rendering each in its zone.
    pub fn from_instants<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        Self {
            start: split(start),
            end: split(end),
        }
    }

    /// Combine both endpoints in `tz`.
    pub fn instants<Tz: TimeZone>(&self, tz: &Tz) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        Ok((self.start.to_instant(tz)?, self.end.to_instant(tz)?))
    }

    /// Whole minutes from start to end. Negative if the window is inverted.
    pub fn duration_minutes<Tz: TimeZone>(&self, tz: &Tz) -> Result<i64> {
        let (start, end) = self.instants(tz)?;
        Ok((end.with_timezone(&Utc) - start.with_timezone(&Utc)).num_minutes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Time,
}

/// A single change event from one of the four form fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit {
    pub side: Side,
    pub field: Field,
    pub value: String,
}

impl Edit {
    pub fn new(side: Side, field: Field, value: impl Into<String>) -> Self {
        Self {
            side,
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Start => f.write_str("start"),
            Side::End => f.write_str("end"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Date => f.write_str("date"),
            Field::Time => f.write_str("time"),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}={}", self.side, self.field, self.value)
    }
}

impl FromStr for Side {
    type Err = PlanTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Side::Start),
            "end" => Ok(Side::End),
            other => Err(PlanTimeError::InvalidEdit(format!(
                "unknown side '{}', expected start or end",
                other
            ))),
        }
    }
}

impl FromStr for Field {
    type Err = PlanTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Field::Date),
            "time" => Ok(Field::Time),
            other => Err(PlanTimeError::InvalidEdit(format!(
                "unknown field '{}', expected date or time",
                other
            ))),
        }
    }
}

/// Parses `<side>-<field>=<value>`, e.g. `start-date=2024-01-05` or `end-time=17:30`.
impl FromStr for Edit {
    type Err = PlanTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let (target, value) = s.split_once('=').ok_or_else(|| {
            PlanTimeError::InvalidEdit(format!("'{}' is missing '=<value>'", s))
        })?;
        let (side, field) = target.split_once('-').ok_or_else(|| {
            PlanTimeError::InvalidEdit(format!(
                "'{}' should look like start-date, start-time, end-date or end-time",
                target
            ))
        })?;

        Ok(Edit::new(side.parse()?, field.parse()?, value))
    }
}
