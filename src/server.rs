use crate::config::Config;
use crate::routes;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use log::{error, info};
use riot_api::{MatchDto, RiotApi, load_fallback_matches};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub api: RiotApi,
    /// Served when no live match detail could be fetched.
    pub fallback_matches: Arc<Vec<MatchDto>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut api = RiotApi::new(config.api_key.clone());
        if let Some(host) = &config.riot_host {
            api = api.with_host(host.clone());
        }

        let fallback_matches = load_fallback_matches(config.fallback_matches.as_deref())
            .context("Failed to load fallback matches")?;
        info!("Loaded {} fallback matches", fallback_matches.len());

        Ok(Self { api, fallback_matches: Arc::new(fallback_matches) })
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home))
        .route("/summoner", get(routes::summoner))
        .route("/livegame", get(routes::live_game))
        .layer(cors)
        .with_state(state)
}

/// Serve until Ctrl+C.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("LoL Edge backend listening on {addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Received shutdown signal");
}
