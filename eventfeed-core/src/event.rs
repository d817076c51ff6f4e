//! Event types shared across the eventfeed crates.
//!
//! The store assigns identifiers: a record fetched from it carries every
//! field except `id`, which is the key the record is filed under.
//! `EventRecord` is that store-shaped record, `Event` is the normalized
//! form with the key attached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event as served to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier, unique within the store.
    pub id: String,
    pub title: String,
    /// Source of truth for year/month filtering.
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Featured events make up the home page listing.
    #[serde(default, rename = "isFeatured")]
    pub is_featured: bool,
}

/// An event as the store holds it: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "isFeatured")]
    pub is_featured: bool,
}

impl EventRecord {
    /// Attach the store key this record was filed under.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            description: self.description,
            location: self.location,
            image: self.image,
            is_featured: self.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_store_json() {
        let record: EventRecord = serde_json::from_str(
            r#"{
                "title": "Networking for introverts",
                "date": "2021-05-12",
                "location": "New Wall Street 8, 98765 New Work",
                "isFeatured": false
            }"#,
        )
        .unwrap();

        assert_eq!(record.title, "Networking for introverts");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 5, 12).unwrap());
        assert!(record.description.is_none());
        assert!(!record.is_featured);
    }

    #[test]
    fn test_into_event_carries_fields_unchanged() {
        let record: EventRecord = serde_json::from_str(
            r#"{ "title": "X", "date": "2022-05-10", "isFeatured": true }"#,
        )
        .unwrap();

        let event = record.clone().into_event("e1".to_string());

        assert_eq!(event.id, "e1");
        assert_eq!(event.title, record.title);
        assert_eq!(event.date, record.date);
        assert!(event.is_featured);
    }
}
