//! # cuedeck-store
//!
//! Key-value store providers for Cuedeck. Supports two modes:
//!
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//! - **memory**: In-process store using [moka](https://crates.io/crates/moka), for tests and development
//!
//! The provider is selected at runtime based on configuration. Every remote
//! operation is bounded by a configurable timeout so a stalled backend
//! degrades to a fast error instead of hanging request handlers.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::StoreManager;
