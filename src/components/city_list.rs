use yew::prelude::*;

use crate::components::{CityItem, Message, Spinner};
use crate::state::use_cities;

#[function_component(CityList)]
pub fn city_list() -> Html {
    let cities_ctx = use_cities();
    let state = cities_ctx.state();

    if state.is_loading {
        return html! { <Spinner /> };
    }

    if !state.error.is_empty() {
        return html! { <Message message={state.error.clone()} /> };
    }

    if state.cities.is_empty() {
        return html! {
            <Message message="Add your first city by clicking on a city on the map" />
        };
    }

    html! {
        <ul class="city-list">
            { for state.cities.iter().map(|city| html! {
                <CityItem key={city.id} city={city.clone()} />
            }) }
        </ul>
    }
}
