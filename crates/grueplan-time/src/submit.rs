//! Serialize a plan window for the create/update plan request.

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanTimeError, Result};
use crate::window::PlanWindow;

/// The timestamps a plan is stored with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// ISO 8601 UTC with milliseconds, e.g. `2024-01-01T14:00:00.000Z`.
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

/// Combine a window in `tz` and render it for submission.
///
/// # Errors
/// Returns `PlanTimeError::InvalidDate` / `PlanTimeError::InvalidTime` if either
/// endpoint does not combine, and `PlanTimeError::EndBeforeStart` if the window
/// is inverted.
pub fn submission<Tz: TimeZone>(tz: &Tz, window: &PlanWindow) -> Result<Submission> {
    let (start, end) = window.instants(tz)?;
    let start = start.with_timezone(&Utc);
    let end = end.with_timezone(&Utc);

    if start > end {
        return Err(PlanTimeError::EndBeforeStart {
            start: to_iso_string(&start),
            end: to_iso_string(&end),
        });
    }

    Ok(Submission {
        start: to_iso_string(&start),
        end: to_iso_string(&end),
        duration_minutes: (end - start).num_minutes(),
    })
}

/// Render an instant as ISO 8601 in UTC with millisecond precision.
///
/// Years outside 0..=9999 use the signed six-digit expanded form
/// (`+010000-01-01T00:00:00.000Z`), the same as a browser's `toISOString`.
pub fn to_iso_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let utc = instant.with_timezone(&Utc);
    match utc.year() {
        0..=9999 => utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        year => format!(
            "{}{:06}{}",
            if year < 0 { '-' } else { '+' },
            year.unsigned_abs(),
            utc.format("-%m-%dT%H:%M:%S%.3fZ")
        ),
    }
}
