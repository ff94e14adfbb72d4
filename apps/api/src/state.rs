use std::sync::Arc;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::notify::Notifier;
use crate::upload::UploadFlow;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub history: HistoryStore,
    pub upload_flow: Arc<UploadFlow>,
    /// Side-channel for transient user-facing notices. Production logs
    /// through tracing; tests substitute a recording impl.
    pub notifier: Arc<dyn Notifier>,
    pub config: Config,
}
