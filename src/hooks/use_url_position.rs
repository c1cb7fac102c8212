use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

/// `lat`/`lng` query parameters carried by the form and map routes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UrlPosition {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl UrlPosition {
    pub fn is_set(&self) -> bool {
        self.lat.is_some() || self.lng.is_some()
    }
}

/// Reads the clicked map position out of the current location's query string.
#[hook]
pub fn use_url_position() -> UrlPosition {
    let location = use_location();
    location
        .and_then(|loc| loc.query::<UrlPosition>().ok())
        .unwrap_or_default()
}
