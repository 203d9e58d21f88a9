//! Broadcast fan-out to every registered connection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::connection::handle::SendOutcome;
use crate::connection::registry::ConnectionRegistry;

/// Pushes a single payload to every connection in the registry.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    /// The live-connection registry.
    registry: Arc<ConnectionRegistry>,
}

impl Broadcaster {
    /// Create a broadcaster over the given registry.
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Deliver `payload` to every live connection. Returns the number of
    /// connections the payload was queued for.
    ///
    /// Each delivery is attempted independently: one closed or slow
    /// connection never aborts delivery to the others. A closed channel is
    /// pruned from the registry on its first failed send, so zombie
    /// connections self-heal without waiting for an explicit disconnect.
    pub fn broadcast(&self, payload: &str) -> usize {
        let snapshot = self.registry.snapshot();
        let mut delivered = 0usize;

        for handle in &snapshot {
            match handle.send(payload.to_string()) {
                SendOutcome::Sent => delivered += 1,
                SendOutcome::Dropped => {}
                SendOutcome::Closed => {
                    warn!(conn_id = %handle.id, "Send failed on closed channel, pruning connection");
                    self.registry.unregister(&handle.id);
                }
            }
        }

        debug!(
            payload = %payload,
            delivered,
            total = snapshot.len(),
            "Broadcast complete"
        );
        delivered
    }
}
