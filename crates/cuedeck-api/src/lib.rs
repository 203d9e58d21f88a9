//! # cuedeck-api
//!
//! The HTTP and WebSocket surface for Cuedeck: router, shared state, DTOs,
//! the session extractor, and the error-to-HTTP boundary.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
