//! Cue repository service.

pub mod service;
