//! HTTP and WebSocket request handlers.

pub mod auth;
pub mod cue;
pub mod health;
pub mod ws;
