#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use influencehub::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let state = match startup::build_state(config) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Failed to load seed data: {}", e);
                std::process::exit(1);
            }
        };

        if let Err(e) = startup::start_scheduler(&state).await {
            tracing::error!("Failed to start scheduler: {}", e);
            std::process::exit(1);
        }

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
