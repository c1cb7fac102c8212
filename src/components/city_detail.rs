use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{BackButton, Message, Spinner};
use crate::state::use_cities;
use crate::utils::format_date;

#[derive(Properties, PartialEq)]
pub struct CityDetailProps {
    /// Route parameter; numeric coercion happens in the store.
    pub id: String,
}

#[function_component(CityDetail)]
pub fn city_detail(props: &CityDetailProps) -> Html {
    let cities_ctx = use_cities();

    // Load (or reuse) the city whenever the route id changes
    {
        let cities_ctx = cities_ctx.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                cities_ctx.load_city(&id).await;
            });
            || ()
        });
    }

    let state = cities_ctx.state();

    if state.is_loading {
        return html! { <Spinner /> };
    }

    let Some(city) = &state.current_city else {
        return html! { <Message message="City not found." /> };
    };

    html! {
        <div class="city-detail">
            <div class="city-detail-row">
                <h6>{"City name"}</h6>
                <h3>
                    <span>{ city.emoji.clone() }</span>
                    {" "}{ city.city_name.clone() }
                </h3>
            </div>

            <div class="city-detail-row">
                <h6>{ format!("You went to {} on", city.city_name) }</h6>
                <p>{ format_date(&city.date) }</p>
            </div>

            if !city.notes.is_empty() {
                <div class="city-detail-row">
                    <h6>{"Your notes"}</h6>
                    <p>{ city.notes.clone() }</p>
                </div>
            }

            <div class="city-detail-row">
                <h6>{"Learn more"}</h6>
                <a
                    href={ format!("https://en.wikipedia.org/wiki/{}", city.city_name) }
                    target="_blank"
                    rel="noreferrer"
                >
                    { format!("Check out {} on Wikipedia →", city.city_name) }
                </a>
            </div>

            <div>
                <BackButton />
            </div>
        </div>
    }
}
