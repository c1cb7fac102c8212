use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::state::use_auth;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Keeps unauthenticated users out of the journal pages. The redirect is an
/// effect, so nothing is rendered for the frame before it fires.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("ProtectedRoute rendered outside a router");

    let is_authenticated = auth.state().is_authenticated;

    use_effect_with(is_authenticated, move |authed| {
        if !*authed {
            navigator.push(&Route::Login);
        }
        || ()
    });

    if is_authenticated {
        html! { <>{ props.children.clone() }</> }
    } else {
        Html::default()
    }
}
