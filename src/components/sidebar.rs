use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub children: Children,
}

/// Left panel of the journal layout: logo, nav, and the routed outlet
/// (list, detail or form).
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="sidebar">
            <header class="logo">
                <span role="img">{"🌍"}</span>
                <h1>{"Travel Journal"}</h1>
            </header>

            <nav class="app-nav">
                <Link<Route> to={Route::Cities}>{"Cities"}</Link<Route>>
            </nav>

            { props.children.clone() }

            <footer class="sidebar-footer">
                <p class="copyright">
                    { format!("© Copyright {} by Travel Journal Inc.", Utc::now().year()) }
                </p>
            </footer>
        </div>
    }
}
