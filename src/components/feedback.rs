use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container">
            <div class="spinner"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub message: AttrValue,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    html! {
        <p class="message">
            <span role="img">{"👋"}</span>
            {" "}{ props.message.clone() }
        </p>
    }
}

#[function_component(BackButton)]
pub fn back_button() -> Html {
    let navigator = use_navigator().expect("BackButton rendered outside a router");

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.back();
    });

    html! {
        <button class="btn btn-back" {onclick}>{"← Back"}</button>
    }
}
