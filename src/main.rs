use axum::{routing::{get, post}, Router};
use std::net::{Ipv4Addr, SocketAddr};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::topdeck::TopdeckClient;

mod models;
mod points;
mod routes;
mod topdeck;

fn app(client: TopdeckClient) -> Router {
    // CORS configuration for the browser front end
    let cors = CorsLayer::new()
        .allow_origin(Any)  // In production, use specific origins
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Topdeck Points API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Autocomplete player search
        .route("/api/players", get(routes::players::search_players))

        // Outcome calculation
        .route("/api/calc", post(routes::calc::calc_brackets))
        .route("/api/simulate", post(routes::simulate::simulate))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // API key is read once here and handed to the client, never a global
    let api_key = std::env::var("TOPDECK_API_KEY")
        .expect("TOPDECK_API_KEY must be set in .env");

    let base_url = std::env::var("TOPDECK_API_URL").ok();

    let host: Ipv4Addr = std::env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string())
        .parse()
        .expect("HOST is not in the correct format");

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT is not the correct format");

    let addr = SocketAddr::from((host, port));

    let client = TopdeckClient::new(api_key, base_url);
    let app = app(client);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
