use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::City;
use crate::state::use_cities;
use crate::utils::format_date_short;

#[derive(Properties, PartialEq)]
pub struct CityItemProps {
    pub city: City,
}

#[function_component(CityItem)]
pub fn city_item(props: &CityItemProps) -> Html {
    let cities_ctx = use_cities();

    let is_current = cities_ctx
        .state()
        .current_city
        .as_ref()
        .map(|c| c.id)
        == Some(props.city.id);

    let on_delete = {
        let cities_ctx = cities_ctx.clone();
        let id = props.city.id;
        Callback::from(move |e: MouseEvent| {
            // The whole row is a link to the detail view; stop the click
            // before it bubbles into the link's own handler, which would
            // navigate to the entry we are about to delete
            e.prevent_default();
            e.stop_propagation();
            let cities_ctx = cities_ctx.clone();
            spawn_local(async move {
                cities_ctx.delete_city(id).await;
            });
        })
    };

    let classes = classes!("city-item", is_current.then_some("city-item--active"));

    html! {
        <li>
            <Link<Route> to={Route::City { id: props.city.id.to_string() }} {classes}>
                <span class="city-item-emoji">{ props.city.emoji.clone() }</span>
                <h3 class="city-item-name">{ props.city.city_name.clone() }</h3>
                <time class="city-item-date">{ format_date_short(&props.city.date) }</time>
                <button class="city-item-delete" onclick={on_delete}>{"×"}</button>
            </Link<Route>>
        </li>
    }
}
