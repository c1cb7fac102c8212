use chrono::{NaiveDate, NaiveTime, Utc};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{BackButton, Message, Spinner};
use crate::hooks::use_url_position;
use crate::models::{NewCity, Position};
use crate::services::reverse_geocode;
use crate::state::use_cities;

/// New-city form. The clicked map position arrives through the URL; an
/// effect reverse-geocodes it and prefills city/country/emoji.
#[function_component(CityForm)]
pub fn city_form() -> Html {
    let cities_ctx = use_cities();
    let navigator = use_navigator().expect("CityForm rendered outside a router");
    let position = use_url_position();

    let city_name = use_state(String::new);
    let country = use_state(String::new);
    let emoji = use_state(String::new);
    let date = use_state(|| Utc::now().date_naive());
    let notes = use_state(String::new);
    let geocoding_loading = use_state(|| false);
    let geocoding_error = use_state(|| None::<String>);

    // Geocode whenever the URL position changes. Rapid map clicks can race
    // these requests; the last response to resolve wins.
    {
        let city_name = city_name.clone();
        let country = country.clone();
        let emoji = emoji.clone();
        let geocoding_loading = geocoding_loading.clone();
        let geocoding_error = geocoding_error.clone();

        use_effect_with(position, move |pos| {
            if let (Some(lat), Some(lng)) = (pos.lat, pos.lng) {
                spawn_local(async move {
                    geocoding_loading.set(true);
                    geocoding_error.set(None);

                    match reverse_geocode(lat, lng).await {
                        Ok(place) => {
                            city_name.set(place.city_name);
                            country.set(place.country);
                            emoji.set(place.emoji);
                        }
                        Err(e) => {
                            log::warn!("🌐 Geocoding failed: {}", e);
                            geocoding_error.set(Some(e.to_string()));
                        }
                    }

                    geocoding_loading.set(false);
                });
            }
            || ()
        });
    }

    let on_city_name = {
        let city_name = city_name.clone();
        Callback::from(move |e: InputEvent| {
            city_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(parsed) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                date.set(parsed);
            }
        })
    };

    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            notes.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let cities_ctx = cities_ctx.clone();
        let navigator = navigator.clone();
        let city_name = city_name.clone();
        let country = country.clone();
        let emoji = emoji.clone();
        let date = date.clone();
        let notes = notes.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if city_name.is_empty() {
                return;
            }
            let (Some(lat), Some(lng)) = (position.lat, position.lng) else {
                return;
            };

            let draft = NewCity {
                city_name: (*city_name).clone(),
                country: (*country).clone(),
                emoji: (*emoji).clone(),
                date: date.and_time(NaiveTime::MIN).and_utc(),
                notes: (*notes).clone(),
                position: Position { lat, lng },
            };

            let cities_ctx = cities_ctx.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Wait for the store before navigating so the list
                // already shows the new entry
                cities_ctx.create_city(draft).await;
                navigator.push(&Route::Cities);
            });
        })
    };

    if *geocoding_loading {
        return html! { <Spinner /> };
    }

    if !position.is_set() {
        return html! { <Message message="Start by clicking somewhere on the map." /> };
    }

    if let Some(message) = (*geocoding_error).clone() {
        return html! { <Message {message} /> };
    }

    let form_class = classes!(
        "form",
        cities_ctx.state().is_loading.then_some("form--loading")
    );

    html! {
        <form class={form_class} onsubmit={on_submit}>
            <div class="form-row">
                <label for="cityName">{"City name"}</label>
                <input id="cityName" value={(*city_name).clone()} oninput={on_city_name} />
                <span class="form-flag">{ (*emoji).clone() }</span>
            </div>

            <div class="form-row">
                <label for="date">{ format!("When did you go to {}?", *city_name) }</label>
                <input
                    id="date"
                    type="date"
                    value={date.format("%Y-%m-%d").to_string()}
                    onchange={on_date}
                />
            </div>

            <div class="form-row">
                <label for="notes">{ format!("Notes about your trip to {}", *city_name) }</label>
                <textarea id="notes" value={(*notes).clone()} oninput={on_notes} />
            </div>

            <div class="form-buttons">
                <button type="submit" class="btn btn-primary">{"Add"}</button>
                <BackButton />
            </div>
        </form>
    }
}
