//! Credit Registry Service
//!
//! A REST API for managing credit ("crédito") records: create, read, update
//! and delete, plus the total amount granted and the amount per client.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx, one pooled connection per request
//! - **Format**: JSON responses; JSON or form-encoded request bodies
//!
//! Layers, from the bottom up: `migrations/` schema → `services::credito_service`
//! (SQL) → `services::validation` → `handlers` → `router`.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
