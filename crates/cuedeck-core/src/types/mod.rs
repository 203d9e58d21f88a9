//! Domain types shared across Cuedeck crates.

pub mod cue;
