//! Error types for plan window operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanTimeError {
    /// Year, month, or day did not parse as an integer, or the date is out of range.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Hour or minute did not parse as an integer.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// An edit descriptor such as `start-date=2024-01-05` could not be parsed.
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    /// Raised at submission only. Reconciled windows never reach this.
    #[error("End {end} is before start {start}")]
    EndBeforeStart { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, PlanTimeError>;
