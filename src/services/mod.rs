//! Business logic services.
//!
//! Services hold the logic separated from HTTP handlers: payload validation
//! and all database access.

pub mod credito_service;
pub mod validation;
