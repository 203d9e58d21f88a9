//! Application state shared across all handlers.

use std::sync::Arc;

use cuedeck_auth::SessionGate;
use cuedeck_core::config::AppConfig;
use cuedeck_realtime::{Broadcaster, ConnectionRegistry};
use cuedeck_service::CueService;
use cuedeck_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are cheap
/// to clone; the registry is explicitly `Arc`-owned and passed by reference
/// to the broadcaster and handlers rather than living in a global.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Key-value store (sessions + cue collection).
    pub store: StoreManager,
    /// Session gate guarding the control plane.
    pub session_gate: SessionGate,
    /// Cue repository service.
    pub cue_service: CueService,
    /// Live viewer connection registry.
    pub registry: Arc<ConnectionRegistry>,
    /// Broadcast fan-out over the registry.
    pub broadcaster: Broadcaster,
}

impl AppState {
    /// Wire up the application state from configuration and a constructed
    /// store. The store is injected so tests can substitute an in-memory
    /// provider.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let broadcaster = Broadcaster::new(registry.clone());
        let session_gate = SessionGate::new(store.clone(), config.auth.clone());
        let cue_service = CueService::new(store.clone());

        Self {
            config: Arc::new(config),
            store,
            session_gate,
            cue_service,
            registry,
            broadcaster,
        }
    }
}
