// ============================================================================
// GEOCODE ADAPTER - reverse geocoding of map clicks
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{GeocodedPlace, ReverseGeocodeResponse};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("That does not seem to be a city. Click somewhere else 😕")]
    NotACity,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Resolve a clicked position to city name, country and flag emoji.
/// One shot, no retry; the form shows failures inline.
pub async fn reverse_geocode(lat: f64, lng: f64) -> Result<GeocodedPlace, GeocodeError> {
    let url = format!(
        "{}?latitude={}&longitude={}",
        CONFIG.geocode_api_url, lat, lng
    );

    log::info!("🌐 Reverse geocoding ({}, {})", lat, lng);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| GeocodeError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(GeocodeError::Network(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        )));
    }

    let data = response
        .json::<ReverseGeocodeResponse>()
        .await
        .map_err(|e| GeocodeError::Parse(e.to_string()))?;

    place_from_response(data)
}

/// Pure half of the adapter. A payload without a country code means the
/// click landed somewhere that is not a city (open water, the poles).
pub fn place_from_response(data: ReverseGeocodeResponse) -> Result<GeocodedPlace, GeocodeError> {
    if data.country_code.is_empty() {
        return Err(GeocodeError::NotACity);
    }

    let city_name = if !data.city.is_empty() {
        data.city
    } else {
        data.locality
    };

    Ok(GeocodedPlace {
        city_name,
        country: data.country_name,
        emoji: country_code_to_emoji(&data.country_code),
    })
}

/// Map each letter of an ISO country code to its Unicode regional-indicator
/// code point, which renders as the country's flag.
pub fn country_code_to_emoji(country_code: &str) -> String {
    country_code
        .trim()
        .to_ascii_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_maps_to_regional_indicators() {
        assert_eq!(country_code_to_emoji("FR"), "🇫🇷");
        assert_eq!(country_code_to_emoji("pt"), "🇵🇹");
        assert_eq!(country_code_to_emoji(""), "");
    }

    #[test]
    fn missing_country_code_is_not_a_city() {
        let data = ReverseGeocodeResponse {
            locality: "North Atlantic Ocean".to_string(),
            ..Default::default()
        };
        assert_eq!(place_from_response(data), Err(GeocodeError::NotACity));
    }

    #[test]
    fn locality_is_the_fallback_for_city() {
        let data = ReverseGeocodeResponse {
            city: String::new(),
            locality: "Alfama".to_string(),
            country_name: "Portugal".to_string(),
            country_code: "PT".to_string(),
        };
        let place = place_from_response(data).unwrap();
        assert_eq!(place.city_name, "Alfama");
        assert_eq!(place.emoji, "🇵🇹");
    }

    #[test]
    fn wire_payload_decodes_and_resolves() {
        let json = r#"{
            "city": "Berlin",
            "locality": "Mitte",
            "countryName": "Germany",
            "countryCode": "DE",
            "latitude": 52.52,
            "longitude": 13.4
        }"#;
        let data: ReverseGeocodeResponse = serde_json::from_str(json).unwrap();
        let place = place_from_response(data).unwrap();
        assert_eq!(place.city_name, "Berlin");
        assert_eq!(place.country, "Germany");
        assert_eq!(place.emoji, "🇩🇪");
    }
}
