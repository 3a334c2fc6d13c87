use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod shared;
mod utils;

#[cfg(any(feature = "desktop", feature = "mobile"))]
mod logging;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    {
        // Pick up API_URL from a local .env before the base url is resolved
        dotenvy::dotenv().ok();
        logging::init_tracing();
    }
    dioxus::launch(app::App);
}
