//! Database models and configuration shared across the crate.

pub mod client;
pub mod config;
