//! Shared helpers for the numbered finestra demos.
pub mod common;
