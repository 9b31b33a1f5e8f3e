//! Domain entities and value objects of the client registry.

pub mod client;
pub mod search;
pub mod types;
