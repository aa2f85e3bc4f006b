//! WASM bindings for grueplan-time.
//!
//! Exposes field combination, reconciliation, and submission to the plan form
//! via `wasm-bindgen`. Windows cross the boundary as JSON strings of the shape
//! `{"start": {"date", "time"}, "end": {"date", "time"}}`. Wall times are read in
//! the browser's local zone.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p grueplan-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/grueplan_wasm.wasm
//! ```

use chrono::Local;
use grueplan_time::{Edit, PlanWindow};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_window(json: &str) -> Result<PlanWindow, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid window JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn js_error(e: grueplan_time::PlanTimeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Combine a date (`YYYY-MM-DD`) and a time (`HH:MM`) field into an RFC 3339
/// instant in the browser's zone.
///
/// Throws `"Invalid date: ..."` or `"Invalid time: ..."` while a field is only
/// partly typed; the form treats that as a provisional value.
#[wasm_bindgen(js_name = "combine")]
pub fn combine(date: &str, time: &str) -> Result<String, JsValue> {
    let instant = grueplan_time::combine(date, time).map_err(js_error)?;
    Ok(instant.fixed_offset().to_rfc3339())
}

/// Apply one field edit to a window and return the reconciled window JSON.
///
/// # Arguments
/// - `window_json` -- current window
/// - `side` -- `"start"` or `"end"`
/// - `field` -- `"date"` or `"time"`
/// - `value` -- the new field value
#[wasm_bindgen(js_name = "reconcile")]
pub fn reconcile(window_json: &str, side: &str, field: &str, value: &str) -> Result<String, JsValue> {
    let current = parse_window(window_json)?;
    let edit = Edit::new(
        side.parse().map_err(js_error)?,
        field.parse().map_err(js_error)?,
        value,
    );

    let next = grueplan_time::reconcile(&Local, &current, &edit).map_err(js_error)?;
    to_json(&next)
}

/// Build the submission timestamps for a window.
///
/// Returns `{start, end, duration_minutes}` with ISO 8601 UTC strings.
#[wasm_bindgen(js_name = "submission")]
pub fn submission(window_json: &str) -> Result<String, JsValue> {
    let window = parse_window(window_json)?;
    let submission = grueplan_time::submission(&Local, &window).map_err(js_error)?;
    to_json(&submission)
}
