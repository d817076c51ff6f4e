//! Normalization of the keyed store document into an ordered event list.

use serde_json::{Map, Value};

use crate::error::{EventFeedError, EventFeedResult};
use crate::event::{Event, EventRecord};

/// Convert a store mapping of key -> record into an ordered list of events.
///
/// One output element per entry, in document order, with `id` set to the
/// store key and every other field copied unchanged. An empty mapping
/// yields an empty list.
pub fn normalize(payload: &Map<String, Value>) -> EventFeedResult<Vec<Event>> {
    payload
        .iter()
        .map(|(key, value)| {
            let record: EventRecord =
                serde_json::from_value(value.clone()).map_err(|e| EventFeedError::Record {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
            Ok(record.into_event(key.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_normalize_keeps_every_entry_and_its_key() {
        let map = payload(json!({
            "a": { "title": "X", "date": "2022-05-10" },
            "b": { "title": "Y", "date": "2022-06-01" },
        }));

        let events = normalize(&map).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a");
        assert_eq!(events[0].title, "X");
        assert_eq!(events[1].id, "b");
        assert_eq!(events[1].title, "Y");
    }

    #[test]
    fn test_normalize_preserves_document_order() {
        // Keys deliberately not in sorted order
        let map = payload(json!({
            "z9": { "title": "first", "date": "2022-01-01" },
            "a1": { "title": "second", "date": "2022-02-01" },
            "m5": { "title": "third", "date": "2022-03-01" },
        }));

        let ids: Vec<String> = normalize(&map).unwrap().into_iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["z9", "a1", "m5"]);
    }

    #[test]
    fn test_normalize_empty_mapping_yields_empty_list() {
        assert!(normalize(&Map::new()).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_rejects_record_without_date() {
        let map = payload(json!({ "a": { "title": "X" } }));

        let err = normalize(&map).unwrap_err();
        assert!(matches!(err, EventFeedError::Record { ref key, .. } if key == "a"));
    }
}
