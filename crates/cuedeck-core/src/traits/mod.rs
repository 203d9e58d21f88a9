//! Shared traits implemented across Cuedeck crates.

pub mod kv;
