//! Real-time WebSocket configuration.

use serde::{Deserialize, Serialize};

/// Real-time connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound message buffer size per connection. A client that falls
    /// this many broadcasts behind starts dropping messages.
    #[serde(default = "default_channel_buffer_size")]
    pub channel_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer_size(),
        }
    }
}

fn default_channel_buffer_size() -> usize {
    64
}
