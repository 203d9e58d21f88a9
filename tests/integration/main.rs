//! Integration tests for the Cuedeck HTTP API.

mod helpers;

mod auth_test;
mod cue_test;
mod trigger_test;
