//! Client registry of the banking control panel.
//!
//! Stores client records in SQLite through Diesel and exposes CRUD operations
//! plus a filtered, paged search through the [`repository`] traits.

pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;
