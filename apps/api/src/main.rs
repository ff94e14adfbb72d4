mod analysis;
mod config;
mod errors;
mod history;
mod models;
mod notify;
mod routes;
mod state;
mod upload;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackendKind};
use crate::history::backend::{FsStore, MemoryStore, StorageBackend};
use crate::history::HistoryStore;
use crate::notify::TracingNotifier;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upload::UploadFlow;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the history storage backend (fs by default, memory for ephemeral runs)
    let backend: Arc<dyn StorageBackend> = match config.storage_backend {
        StorageBackendKind::Fs => {
            info!("History storage: fs ({})", config.data_dir.display());
            Arc::new(FsStore::new(config.data_dir.clone()))
        }
        StorageBackendKind::Memory => {
            info!("History storage: memory (ephemeral)");
            Arc::new(MemoryStore::new())
        }
    };
    let history = HistoryStore::new(backend);

    // One token for both graceful shutdown and cutting short an in-flight
    // simulated analysis
    let shutdown = CancellationToken::new();
    let upload_flow = Arc::new(UploadFlow::new(shutdown.clone()));

    let state = AppState {
        history,
        upload_flow,
        notifier: Arc::new(TracingNotifier),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
