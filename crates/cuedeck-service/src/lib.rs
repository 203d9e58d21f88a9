//! # cuedeck-service
//!
//! The cue repository service: CRUD over the single `cues_list` blob in the
//! key-value store. The application holds no authoritative in-memory copy —
//! every read re-fetches and every write rewrites the whole collection.

pub mod cue;

pub use cue::service::CueService;
