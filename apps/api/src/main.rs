mod catalog;
mod chat;
mod config;
mod courses;
mod errors;
mod leaderboard;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::chat::ChatClient;
use crate::config::Config;
use crate::profile::store::JsonFileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (defaults make a bare `cargo run` work)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Spectrum Works API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static datasets (bundled unless DATASET_DIR overrides them)
    let catalog = match &config.dataset_dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::bundled()?,
    };

    // Initialize the profile store
    let profiles = JsonFileStore::new(config.profile_store_path.clone());
    info!(
        "Profile store at {}",
        config.profile_store_path.display()
    );

    // Initialize the chat backend client
    let chat = ChatClient::new(config.chat_base_url.clone(), config.chat_api_key.clone());
    info!("Chat client initialized (backend: {})", config.chat_base_url);

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        profiles: Arc::new(profiles),
        chat,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
