//! # grueplan-time
//!
//! Plan window arithmetic for Grueplan.
//!
//! The plan form edits a start and an end through four separate fields: two
//! `YYYY-MM-DD` dates and two `HH:MM` times. This crate turns those strings into
//! zone-local instants and keeps `start <= end` as the user edits one field at
//! a time. Every form variant calls into the same code, so they cannot drift.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::Utc;
//! use grueplan_time::{reconcile_start_edit, Endpoint, Field, PlanWindow};
//!
//! let window = PlanWindow::new(
//!     Endpoint::new("2024-01-01", "09:00"),
//!     Endpoint::new("2024-01-01", "10:00"),
//! );
//!
//! // Moving the start past the end drags the end along.
//! let next = reconcile_start_edit(&Utc, &window, Field::Time, "11:00").unwrap();
//! assert_eq!(next.end, Endpoint::new("2024-01-01", "11:00"));
//! ```
//!
//! ## Modules
//!
//! - [`instant`] — date/time strings ↔ zone-local instant (`combine`, `split`)
//! - [`window`] — `Endpoint`, `PlanWindow`, and `Edit` value types
//! - [`reconcile`] — drag the opposite endpoint when an edit breaks ordering
//! - [`submit`] — ISO 8601 timestamps for the plan request
//! - [`error`] — Error types

pub mod error;
pub mod instant;
pub mod reconcile;
pub mod submit;
pub mod window;

pub use error::PlanTimeError;
pub use instant::{combine, combine_in, split};
pub use reconcile::{reconcile, reconcile_end_edit, reconcile_start_edit};
pub use submit::{submission, to_iso_string, Submission};
pub use window::{Edit, Endpoint, Field, PlanWindow, Side};
