use serde::Deserialize;

/// Wire shape of the reverse-geocoding service payload. All fields are
/// optional on the wire; clicks over open water come back mostly empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub country_code: String,
}

/// Resolved place data used to prefill the new-city form.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
}
