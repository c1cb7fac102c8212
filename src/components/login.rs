use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::user::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::use_auth;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("Login rendered outside a router");

    // Pre-filled demo credentials
    let email = use_state(|| DEMO_EMAIL.to_string());
    let password = use_state(|| DEMO_PASSWORD.to_string());

    // Once authenticated, replace the history entry so the back button
    // does not bounce through the login page
    {
        let navigator = navigator.clone();
        let is_authenticated = auth.state().is_authenticated;
        use_effect_with(is_authenticated, move |authed| {
            if *authed {
                navigator.replace(&Route::Cities);
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !email.is_empty() && !password.is_empty() {
                auth.login(&email, &password);
            }
        })
    };

    html! {
        <main class="login">
            <form class="login-form" onsubmit={on_submit}>
                <div class="form-row">
                    <label for="email">{"Email address"}</label>
                    <input
                        type="email"
                        id="email"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>

                <div class="form-row">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </div>

                <div>
                    <button type="submit" class="btn btn-primary">{"Login"}</button>
                </div>
            </form>
        </main>
    }
}
