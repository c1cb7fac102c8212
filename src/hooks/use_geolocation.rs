use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct UseGeolocationHandle {
    pub is_loading: bool,
    pub position: Option<(f64, f64)>,
    pub error: Option<String>,
    pub get_position: Callback<()>,
}

/// Browser geolocation behind a hook: call `get_position` to ask the browser
/// once, then read `position` on the next render.
#[hook]
pub fn use_geolocation() -> UseGeolocationHandle {
    let is_loading = use_state(|| false);
    let position = use_state(|| None::<(f64, f64)>);
    let error = use_state(|| None::<String>);

    let get_position = {
        let is_loading = is_loading.clone();
        let position = position.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let geolocation = web_sys::window()
                .map(|w| w.navigator())
                .and_then(|n| n.geolocation().ok());

            let geolocation = match geolocation {
                Some(g) => g,
                None => {
                    error.set(Some("Your browser does not support geolocation".to_string()));
                    return;
                }
            };

            is_loading.set(true);

            let on_success = {
                let position = position.clone();
                let is_loading = is_loading.clone();
                Closure::wrap(Box::new(move |pos: web_sys::Position| {
                    let coords = pos.coords();
                    log::info!(
                        "📍 Geolocation: ({}, {})",
                        coords.latitude(),
                        coords.longitude()
                    );
                    position.set(Some((coords.latitude(), coords.longitude())));
                    is_loading.set(false);
                }) as Box<dyn FnMut(web_sys::Position)>)
            };

            let on_error = {
                let error = error.clone();
                let is_loading = is_loading.clone();
                Closure::wrap(Box::new(move |err: web_sys::PositionError| {
                    log::warn!("📍 Geolocation failed: {}", err.message());
                    error.set(Some(err.message()));
                    is_loading.set(false);
                }) as Box<dyn FnMut(web_sys::PositionError)>)
            };

            if geolocation
                .get_current_position_with_error_callback(
                    on_success.as_ref().unchecked_ref(),
                    Some(on_error.as_ref().unchecked_ref()),
                )
                .is_err()
            {
                error.set(Some("Could not query geolocation".to_string()));
                is_loading.set(false);
            }

            // The browser fires these at most once; leak them until then
            on_success.forget();
            on_error.forget();
        })
    };

    UseGeolocationHandle {
        is_loading: *is_loading,
        position: *position,
        error: (*error).clone(),
        get_position,
    }
}
