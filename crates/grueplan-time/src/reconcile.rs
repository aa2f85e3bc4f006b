//! Keep a plan window ordered while the user edits one field at a time.
//!
//! When an edit would put the start after the end, the opposite endpoint is
//! dragged along instead of rejecting the edit. Only the field that was edited
//! snaps on the dragged side, so a date edit never overwrites a time the user
//! picked, and vice versa:
//!
//! | Edited field | Dragged endpoint becomes |
//! |--------------|--------------------------|
//! | start date   | new start date, start time |
//! | start time   | start date, new start time |
//! | end date     | new end date, start's own time (clamped to the new end) |
//! | end time     | start's own date, new end time (clamped to the new end) |
//!
//! Every returned window is re-rendered from its instants, so out-of-range
//! input such as `2024-02-30` comes back canonical (`2024-03-01`).

use chrono::TimeZone;
use tracing::debug;

use crate::error::Result;
use crate::window::{Edit, Field, PlanWindow, Side};

/// Apply a single field edit and reconcile the opposite endpoint.
pub fn reconcile<Tz: TimeZone>(tz: &Tz, current: &PlanWindow, edit: &Edit) -> Result<PlanWindow> {
    match edit.side {
        Side::Start => reconcile_start_edit(tz, current, edit.field, &edit.value),
        Side::End => reconcile_end_edit(tz, current, edit.field, &edit.value),
    }
}

/// Replace the start's `field` with `value`, pulling the end forward if needed.
///
/// # Errors
/// Returns `PlanTimeError::InvalidDate` / `PlanTimeError::InvalidTime` if the
/// edited start or the current end does not combine.
pub fn reconcile_start_edit<Tz: TimeZone>(
    tz: &Tz,
    current: &PlanWindow,
    field: Field,
    value: &str,
) -> Result<PlanWindow> {
    let new_start = current.start.with_field(field, value).to_instant(tz)?;
    let current_end = current.end.to_instant(tz)?;

    if new_start <= current_end {
        return Ok(PlanWindow::from_instants(&new_start, &current_end));
    }

    // A start-date edit drags the end to (new date, start time) and a
    // start-time edit to (start date, new time). Both are the new start.
    debug!(
        %field,
        value,
        end = %current_end.naive_local(),
        dragged_to = %new_start.naive_local(),
        "start edit passed the end; dragging end forward"
    );
    Ok(PlanWindow::from_instants(&new_start, &new_start))
}

/// Replace the end's `field` with `value`, pulling the start backward if needed.
///
/// # Errors
/// Returns `PlanTimeError::InvalidDate` / `PlanTimeError::InvalidTime` if the
/// edited end or the current start does not combine.
pub fn reconcile_end_edit<Tz: TimeZone>(
    tz: &Tz,
    current: &PlanWindow,
    field: Field,
    value: &str,
) -> Result<PlanWindow> {
    let new_end = current.end.with_field(field, value).to_instant(tz)?;
    let current_start = current.start.to_instant(tz)?;

    if new_end >= current_start {
        return Ok(PlanWindow::from_instants(&current_start, &new_end));
    }

    let snapped = current.start.with_field(field, value).to_instant(tz)?;
    let new_start = if snapped > new_end {
        new_end.clone()
    } else {
        snapped
    };

    debug!(
        %field,
        value,
        start = %current_start.naive_local(),
        dragged_to = %new_start.naive_local(),
        "end edit passed the start; dragging start backward"
    );
    Ok(PlanWindow::from_instants(&new_start, &new_end))
}
