//! # cuedeck-core
//!
//! Core crate for Cuedeck. Contains the unified error system, configuration
//! schemas, the key-value store trait, and the cue domain types.
//!
//! This crate has **no** internal dependencies on other Cuedeck crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
