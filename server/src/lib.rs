//! Signup API for the Tourisn site.
//!
//! The browser never sees the service-role key, so the one privileged flow lives here:
//!
//! 1. create the auth user, already confirmed, with `full_name` and `role` in its metadata
//! 2. bcrypt the password (cost `BCRYPT_COST`, default 10)
//! 3. insert the `profiles` row under the auth user's id
//!
//! Any failing step answers `{ "error": ... }` and stops; earlier steps are kept.
//!
//! When `STATIC_DIR` points at the built client, the same process hosts it, falling back to
//! `index.html` so dashboard URLs can be opened directly.
//!
//! # Setup
//!
//! ```sh
//! SUPABASE_URL=http://localhost:54321 \
//! SUPABASE_SERVICE_ROLE_KEY=... \
//! STATIC_DIR=target/dx/tourisn/release/web/public \
//! cargo run -p server
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use routes::{health_handler, signup_handler};
use shared::api::SIGNUP_PATH;
use state::AppState;

const INDEX_HTML: &str = "index.html";

pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route(SIGNUP_PATH, post(signup_handler))
        .route("/healthz", get(health_handler));

    if let Some(dir) = &state.config.static_dir {
        app = app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join(INDEX_HTML))),
        );
    }

    let origins = state
        .config
        .cors_origins
        .iter()
        .filter_map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| warn!("Ignoring CORS origin {o}: {e}"))
                .ok()
        })
        .collect::<Vec<_>>();

    if !origins.is_empty() {
        let cors = CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));

        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Loading config...");
    let config = Config::load().context("Environment misconfigured")?;
    let state = AppState::new(config);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
