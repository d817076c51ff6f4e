//! Error types for the eventfeed ecosystem.

use thiserror::Error;

/// Errors that can occur while reading from the event store.
#[derive(Error, Debug)]
pub enum EventFeedError {
    #[error("Store request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Store payload error: {0}")]
    Payload(String),

    #[error("Malformed event record '{key}': {reason}")]
    Record { key: String, reason: String },
}

/// Result type alias for eventfeed operations.
pub type EventFeedResult<T> = Result<T, EventFeedError>;
