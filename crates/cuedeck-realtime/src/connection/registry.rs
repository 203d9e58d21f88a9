//! Connection registry — the in-memory set of live viewer connections.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use super::handle::{ConnectionHandle, ConnectionId};

/// Thread-safe registry of all live viewer connections.
///
/// Safe under arbitrary interleaving of register/unregister/snapshot from
/// concurrent request handlers and connection tasks; no lock is ever held
/// across a network send.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    /// Connection ID → handle.
    connections: DashMap<ConnectionId, Arc<ConnectionHandle>>,
}

impl ConnectionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Add a newly-established connection to the live set.
    pub fn register(&self, handle: Arc<ConnectionHandle>) {
        let conn_id = handle.id;
        self.connections.insert(conn_id, handle);
        info!(conn_id = %conn_id, count = self.count(), "Viewer connection registered");
    }

    /// Remove a connection. Idempotent: removing twice, or removing an id
    /// that was never registered, is a no-op.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some((_, handle)) = self.connections.remove(conn_id) {
            handle.mark_closed();
            info!(conn_id = %conn_id, count = self.count(), "Viewer connection unregistered");
        }
    }

    /// Current live-connection count.
    pub fn count(&self) -> usize {
        self.connections.len()
    }

    /// Stable snapshot of all live connections.
    pub fn snapshot(&self) -> Vec<Arc<ConnectionHandle>> {
        self.connections
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
