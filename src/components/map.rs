use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::CONFIG;
use crate::hooks::{use_geolocation, use_url_position, UrlPosition};
use crate::state::use_cities;

// Map rendering lives on the JS side (Leaflet); the component drives it
// through these window-level bindings.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initJournalMap)]
    fn init_journal_map(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = setCityMarkers)]
    fn set_city_markers(cities_json: &str);

    #[wasm_bindgen(js_name = setMapCenter)]
    fn set_map_center(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = onMapClick)]
    fn on_map_click(callback: &js_sys::Function);
}

#[function_component(MapView)]
pub fn map_view() -> Html {
    let cities_ctx = use_cities();
    let navigator = use_navigator().expect("MapView rendered outside a router");
    let url_position = use_url_position();
    let geolocation = use_geolocation();

    // Initialize the map once, after a short delay so the container exists
    {
        use_effect_with((), move |_| {
            Timeout::new(100, move || {
                log::info!("🗺️ Initializing journal map");
                init_journal_map(
                    "map",
                    CONFIG.map_config.default_center_lat,
                    CONFIG.map_config.default_center_lng,
                    CONFIG.map_config.default_zoom,
                );
            })
            .forget();
            || ()
        });
    }

    // Clicking the map opens the form for the clicked position
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |lat: f64, lng: f64| {
                log::info!("🗺️ Map click: ({}, {})", lat, lng);
                let query = UrlPosition {
                    lat: Some(lat),
                    lng: Some(lng),
                };
                if navigator.push_with_query(&Route::Form, &query).is_err() {
                    log::error!("❌ Could not navigate to the form");
                }
            }) as Box<dyn FnMut(f64, f64)>);

            on_map_click(closure.as_ref().unchecked_ref());
            // Registered once for the lifetime of the page
            closure.forget();
            || ()
        });
    }

    // Mirror the store into map markers
    {
        let cities = cities_ctx.state().cities.clone();
        use_effect_with(cities, move |cities| {
            match serde_json::to_string(cities) {
                Ok(json) => set_city_markers(&json),
                Err(e) => log::error!("❌ Error serializing markers: {}", e),
            }
            || ()
        });
    }

    // Recenter on the URL position, or on the device position once known
    {
        let geo_position = geolocation.position;
        use_effect_with((url_position, geo_position), move |(url_pos, geo_pos)| {
            if let (Some(lat), Some(lng)) = (url_pos.lat, url_pos.lng) {
                set_map_center(lat, lng);
            } else if let Some((lat, lng)) = geo_pos {
                set_map_center(*lat, *lng);
            }
            || ()
        });
    }

    html! {
        <div class="map-container">
            if geolocation.position.is_none() {
                <button
                    class="btn btn-position"
                    onclick={geolocation.get_position.reform(|_: MouseEvent| ())}
                >
                    { if geolocation.is_loading { "Loading..." } else { "Use your position" } }
                </button>
            }
            <div id="map" class="map"></div>
        </div>
    }
}
