mod app;
mod components;
mod config;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🌍 Travel Journal starting...");

    yew::Renderer::<App>::new().render();
}
