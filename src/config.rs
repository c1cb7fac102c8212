use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the JSON city store (`json-server` style REST backend).
    pub cities_api_url: String,
    /// Reverse-geocoding endpoint, queried with `?latitude=&longitude=`.
    pub geocode_api_url: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cities_api_url: "http://localhost:9000".to_string(),
            geocode_api_url: "https://api.bigdatacloud.net/data/reverse-geocode-client"
                .to_string(),
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 40.0,
            default_center_lng: 0.0,
            default_zoom: 6.0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    /// (forwarded from `.env` by build.rs).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cities_api_url: option_env!("CITIES_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.cities_api_url),
            geocode_api_url: option_env!("GEOCODE_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.geocode_api_url),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_zoom),
            },
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
