//! HTTP client for the remote event store.
//!
//! The store is a JSON document whose top-level value maps store-assigned
//! keys to event records. A single GET retrieves the whole document; there
//! is no timeout, retry, or cancellation here.

use serde_json::Value;

use crate::error::{EventFeedError, EventFeedResult};
use crate::event::Event;
use crate::normalize::normalize;

/// Read-only client for the events document.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    events_url: String,
}

impl StoreClient {
    pub fn new(events_url: impl Into<String>) -> Self {
        StoreClient {
            http: reqwest::Client::new(),
            events_url: events_url.into(),
        }
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    /// Fetch the full document and normalize it into an ordered event list.
    pub async fn fetch_all(&self) -> EventFeedResult<Vec<Event>> {
        let body = self
            .http
            .get(&self.events_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_payload(&body)
    }

    /// Fetch the full document and keep only featured events.
    pub async fn fetch_featured(&self) -> EventFeedResult<Vec<Event>> {
        let mut events = self.fetch_all().await?;
        events.retain(|event| event.is_featured);
        Ok(events)
    }
}

/// Decode a raw document body into the normalized event list.
///
/// The store serves `null` rather than `{}` when it holds no events; both
/// decode to an empty list.
pub fn parse_payload(body: &str) -> EventFeedResult<Vec<Event>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| EventFeedError::Payload(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => normalize(&map),
        other => Err(EventFeedError::Payload(format!(
            "expected a top-level object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_object() {
        let events = parse_payload(
            r#"{
                "e1": { "title": "X", "date": "2022-05-10" },
                "e2": { "title": "Y", "date": "2022-06-01" }
            }"#,
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "e1");
        assert_eq!(events[1].id, "e2");
    }

    #[test]
    fn test_parse_payload_null_is_empty_store() {
        assert!(parse_payload("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_payload_empty_object() {
        assert!(parse_payload("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_payload_rejects_non_object_top_level() {
        let err = parse_payload(r#"[{"title": "X"}]"#).unwrap_err();
        assert!(matches!(err, EventFeedError::Payload(_)));
    }

    #[test]
    fn test_parse_payload_rejects_invalid_json() {
        let err = parse_payload("not json").unwrap_err();
        assert!(matches!(err, EventFeedError::Payload(_)));
    }
}
