//! # cuedeck-realtime
//!
//! The live fan-out core of Cuedeck: an in-memory registry of open viewer
//! connections and a broadcaster that pushes a payload to all of them.
//!
//! Delivery is best-effort and at-most-once. Per-connection ordering is
//! preserved by the per-connection outbound queue; there is no ordering
//! guarantee across connections and no replay for late joiners.

pub mod broadcast;
pub mod connection;

pub use broadcast::Broadcaster;
pub use connection::handle::{ConnectionHandle, ConnectionId};
pub use connection::registry::ConnectionRegistry;
