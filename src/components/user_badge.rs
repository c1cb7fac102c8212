use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::state::use_auth;

#[function_component(UserBadge)]
pub fn user_badge() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("UserBadge rendered outside a router");

    let Some(user) = auth.state().user.clone() else {
        return Html::default();
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="user-badge">
            <img src={user.avatar} alt={user.name.clone()} />
            <span>{ format!("Welcome, {}", user.name) }</span>
            <button onclick={on_logout}>{"Logout"}</button>
        </div>
    }
}
