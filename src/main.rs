//! Admin Dashboard - Dioxus registration screen
//!
//! Collects a new admin account, validates required fields after a quiet
//! period, posts it to `/admin/register` and keeps the returned token.
//!
//! Builds for the browser by default; the `desktop` feature runs the same
//! UI natively.

mod api;
mod components;
mod config;
mod form;
mod models;
mod routes;
mod state;
mod storage;
mod timer;

use dioxus::prelude::*;
use components::Notification;
use routes::Route;

fn main() {
    // On wasm, the API lives on the page origin
    #[cfg(target_arch = "wasm32")]
    {
        config::init_config(config::AppConfig::from_window());
    }

    // On native, configure logging and read overrides from the environment
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("admin_dashboard=info")))
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        match config::AppConfig::from_env() {
            Ok(settings) => config::init_config(settings),
            Err(e) => {
                tracing::error!("Invalid configuration: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    run_app();
}

fn run_app() {
    let settings = config::config();
    tracing::info!("Registration endpoint at {}", settings.api_url);

    // Initialize API client
    api::init_api_client(&settings.api_url);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Signals need a runtime, so restore inside the root component
    use_hook(state::restore_auth);

    rsx! {
        // Notification toast
        Notification {}

        Router::<Route> {}
    }
}
