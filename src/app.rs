use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AppLayout, CityDetail, CityForm, CityList, Login, ProtectedRoute};
use crate::state::{AuthProvider, CitiesProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/app")]
    App,
    #[at("/app/cities")]
    Cities,
    #[at("/app/cities/:id")]
    City { id: String },
    #[at("/app/form")]
    Form,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Login => html! { <Login /> },
        Route::App | Route::Cities => protected(html! { <CityList /> }),
        Route::City { id } => protected(html! { <CityDetail {id} /> }),
        Route::Form => protected(html! { <CityForm /> }),
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"Page not found 😢"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the journal"}</Link<Route>>
            </main>
        },
    }
}

/// Journal pages share the sidebar/map layout and require a session.
fn protected(outlet: Html) -> Html {
    html! {
        <ProtectedRoute>
            <AppLayout>{outlet}</AppLayout>
        </ProtectedRoute>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <CitiesProvider>
                    <Switch<Route> render={switch} />
                </CitiesProvider>
            </AuthProvider>
        </BrowserRouter>
    }
}
