use yew::prelude::*;

use crate::components::{MapView, Sidebar, UserBadge};

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Children,
}

/// Two-pane journal layout: sidebar with the routed outlet, map on the right,
/// user badge floating on top.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <Sidebar>{ props.children.clone() }</Sidebar>
            <MapView />
            <UserBadge />
        </div>
    }
}
