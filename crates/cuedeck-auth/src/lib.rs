//! # cuedeck-auth
//!
//! The session gate for Cuedeck. A single administrator password guards the
//! control plane; successful login mints an opaque high-entropy bearer token
//! stored in the key-value store under a TTL. Verification is a predicate
//! that fails closed: an unreachable trust store never authenticates anyone.

pub mod bearer;
pub mod gate;
pub mod token;

pub use gate::SessionGate;
