//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (body, URL params, request connection)
//! 2. Delegates validation and storage to `services`
//! 3. Returns HTTP response (JSON or HTML, status code)

/// Credit CRUD and aggregate endpoints
pub mod creditos;
/// Service health endpoint
pub mod health;
/// Landing page
pub mod pages;
