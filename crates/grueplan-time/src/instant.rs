//! Combine `YYYY-MM-DD` / `HH:MM` form values into a zone-local instant, and back.
//!
//! Parsing is deliberately loose: each component only has to start with an
//! integer, and out-of-range components carry into the next unit instead of
//! failing (`2024-02-30` is March 1st, `24:00` is midnight of the next day).
//! Only a component with no leading integer at all is an error.
//!
//! No offset is ever read from the input. The wall time is resolved in the zone
//! the caller passes in; [`combine`] uses the zone of the running process.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use tracing::trace;

use crate::error::{PlanTimeError, Result};
use crate::window::Endpoint;

/// Combine a date and a time field into an instant in the process-local zone.
///
/// Years are taken literally: `0099-01-01` is the year 99, not 1999.
///
/// # Errors
/// Returns `PlanTimeError::InvalidDate` if year, month, or day has no leading integer.
/// Returns `PlanTimeError::InvalidTime` if hour or minute has no leading integer.
pub fn combine(date: &str, time: &str) -> Result<DateTime<Local>> {
    combine_in(&Local, date, time)
}

/// Combine a date and a time field into an instant in `tz`.
///
/// Seconds and sub-seconds are always zero, so combining the same inputs twice
/// yields equal instants.
///
/// Wall times that occur twice (DST fall-back) resolve to the earlier instant.
/// Wall times that never occur (DST spring-forward) are read with the offset in
/// force before the transition, which lands them after the gap: `02:30` in a
/// one-hour gap becomes `03:30`.
///
/// Years are taken literally, including 0 through 99. A leading `-` or `+`
/// signs the year, so `-0001-12-15` (as [`split`] renders it) combines again.
///
/// # Errors
/// Returns `PlanTimeError::InvalidDate` if year, month, or day has no leading
/// integer, or if the normalized date falls outside chrono's range.
/// Returns `PlanTimeError::InvalidTime` if hour or minute has no leading integer.
pub fn combine_in<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> Result<DateTime<Tz>> {
    let (year, month, day) = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;

    // Month arrives 1-indexed.
    let wall = normalize(year, month - 1, day, hour, minute)
        .ok_or_else(|| PlanTimeError::InvalidDate(format!("'{} {}' is out of range", date, time)))?;

    let instant = resolve_wall_time(tz, wall)
        .ok_or_else(|| PlanTimeError::InvalidDate(format!("'{} {}' is out of range", date, time)))?;

    trace!(date, time, wall = %wall, "combined plan field values");
    Ok(instant)
}

/// Render an instant back into the `(YYYY-MM-DD, HH:MM)` pair a form displays.
///
/// The instant is rendered in its own zone, so `split(&combine_in(tz, d, t)?)`
/// gives back `(d, t)` for any in-range date and any wall time that exists.
pub fn split<Tz: TimeZone>(instant: &DateTime<Tz>) -> Endpoint {
    let wall = instant.naive_local();
    Endpoint {
        date: wall.format("%Y-%m-%d").to_string(),
        time: wall.format("%H:%M").to_string(),
    }
}

fn parse_date(date: &str) -> Result<(i64, i64, i64)> {
    // The year's own sign has to come off before splitting on '-'.
    let trimmed = date.trim_start();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut parts = body.split('-');
    let mut next = || parts.next().and_then(parse_leading_int);

    match (next(), next(), next()) {
        (Some(year), Some(month), Some(day)) => {
            Ok((if negative { -year } else { year }, month, day))
        }
        _ => Err(PlanTimeError::InvalidDate(format!(
            "'{}' is not a YYYY-MM-DD value",
            date
        ))),
    }
}

fn parse_time(time: &str) -> Result<(i64, i64)> {
    let mut parts = time.split(':');
    let mut next = || parts.next().and_then(parse_leading_int);

    match (next(), next()) {
        (Some(hour), Some(minute)) => Ok((hour, minute)),
        _ => Err(PlanTimeError::InvalidTime(format!(
            "'{}' is not an HH:MM value",
            time
        ))),
    }
}

/// Read the integer a component starts with.
///
/// Leading whitespace and one sign are accepted; anything after the digits is
/// ignored. `None` when there are no digits or the value does not fit an `i64`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Build a wall-clock time from possibly out-of-range components.
///
/// `month0` is 0-indexed. Overflowing months roll into the year first, then the
/// day, hour, and minute offsets are added to the first of that month.
fn normalize(year: i64, month0: i64, day: i64, hour: i64, minute: i64) -> Option<NaiveDateTime> {
    let months = year.checked_mul(12)?.checked_add(month0)?;
    let y = i32::try_from(months.div_euclid(12)).ok()?;
    let m = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(y, m, 1)?.and_hms_opt(0, 0, 0)?;

    let offset = Duration::try_days(day.checked_sub(1)?)?
        .checked_add(&Duration::try_hours(hour)?)?
        .checked_add(&Duration::try_minutes(minute)?)?;

    first_of_month.checked_add_signed(offset)
}

fn resolve_wall_time<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => {
            // Inside a gap: apply the offset from before the transition.
            let before = wall.checked_sub_signed(Duration::try_days(1)?)?;
            let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
            let utc = wall
                .checked_sub_signed(Duration::try_seconds(i64::from(offset.local_minus_utc()))?)?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}
