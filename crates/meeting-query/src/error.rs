//! Error types for meeting-query operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    #[error("Invalid time range: start {start}, duration {duration} (must be non-empty and end by 24:00)")]
    InvalidRange { start: u32, duration: u32 },

    #[error("Invalid meeting duration: {0} (must be at least one minute)")]
    InvalidDuration(u32),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
