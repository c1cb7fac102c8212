// ============================================================================
// CITY API - HTTP communication with the JSON city store (stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{City, NewCity};

/// Stateless client for the city REST backend.
#[derive(Clone)]
pub struct CityApi {
    base_url: String,
}

impl CityApi {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.cities_api_url.clone(),
        }
    }

    /// Fetch the full city collection.
    pub async fn list(&self) -> Result<Vec<City>, String> {
        let url = format!("{}/cities", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<Vec<City>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Fetch a single city. The id arrives straight from the URL, so it is
    /// passed through as-is and the backend decides whether it exists.
    pub async fn get(&self, id: &str) -> Result<City, String> {
        let url = format!("{}/cities/{}", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<City>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Create a city; the backend assigns the id and echoes the record back.
    pub async fn create(&self, draft: &NewCity) -> Result<City, String> {
        let url = format!("{}/cities", self.base_url);

        log::info!("🏙️ Creating city: {}", draft.city_name);

        let response = Request::post(&url)
            .json(draft)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<City>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    /// Delete a city by id. The response body is not needed.
    pub async fn delete(&self, id: u32) -> Result<(), String> {
        let url = format!("{}/cities/{}", self.base_url, id);

        log::info!("🗑️ Deleting city: {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }
}
