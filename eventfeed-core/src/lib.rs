//! Core types for the eventfeed ecosystem.
//!
//! This crate provides everything the server needs short of HTTP routing:
//! - `Event` and the store-shaped `EventRecord`
//! - `StoreClient` for fetching the remote events document
//! - normalization of the keyed store document into an ordered event list
//! - year/month filter validation and matching

pub mod error;
pub mod event;
pub mod filter;
pub mod normalize;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{EventFeedError, EventFeedResult};
pub use event::{Event, EventRecord};
pub use filter::{
    apply_filter, filter_events, FilterError, FilterOutcome, Period, MAX_FILTER_YEAR,
    MIN_FILTER_YEAR,
};
pub use normalize::normalize;
pub use store::{parse_payload, StoreClient};
