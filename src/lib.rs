// ABOUTME: Library root for republish - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;
