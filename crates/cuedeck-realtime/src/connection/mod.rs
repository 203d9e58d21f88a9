//! Connection lifecycle: handles and the live registry.

pub mod handle;
pub mod registry;
