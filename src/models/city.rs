use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position of a visited city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// A journal entry as stored by the backend. Field names follow the JSON
/// store's camelCase wire format. Immutable once stored except via delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Assigned server-side on create.
    pub id: u32,
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

/// Draft entry submitted by the form; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_deserializes_from_store_document() {
        let json = r#"{
            "id": 73930385,
            "cityName": "Lisbon",
            "country": "Portugal",
            "emoji": "🇵🇹",
            "date": "2027-10-31T15:59:59.138Z",
            "notes": "Allegedly best city in the world",
            "position": { "lat": 38.727881642324164, "lng": -9.140900099907554 }
        }"#;

        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.id, 73930385);
        assert_eq!(city.city_name, "Lisbon");
        assert_eq!(city.emoji, "🇵🇹");
        assert!((city.position.lat - 38.7278).abs() < 0.001);
    }

    #[test]
    fn missing_notes_defaults_to_empty() {
        let json = r#"{
            "id": 1,
            "cityName": "Madrid",
            "country": "Spain",
            "emoji": "🇪🇸",
            "date": "2027-07-15T08:22:53.976Z",
            "position": { "lat": 40.46, "lng": -3.7 }
        }"#;

        let city: City = serde_json::from_str(json).unwrap();
        assert!(city.notes.is_empty());
    }
}
