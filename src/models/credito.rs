//! Credit record models and API request/response types.
//!
//! This module defines:
//! - `Credito`: Database entity representing a credit record
//! - `NuevoCredito`: A fully validated set of writable fields
//! - `CreditoParcial`: The subset of fields supplied in a partial payload
//! - Aggregate response types (`TotalResponse`, `ClienteTotal`)

use chrono::NaiveDate;
use serde::Serialize;

/// Represents a credit record from the database.
///
/// # Database Table
///
/// Maps to the `creditos` table. `fecha_otorgamiento` is stored as
/// `YYYY-MM-DD` text and decoded back into a date.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "cliente": "Ana",
///   "monto": 1000.0,
///   "tasa_interes": 5.0,
///   "plazo": 12,
///   "fecha_otorgamiento": "2024-01-15"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Credito {
    /// Auto-assigned, never reused or changed
    pub id: i64,

    pub cliente: String,

    /// Amount granted, always >= 0
    pub monto: f64,

    /// Interest rate, always >= 0
    pub tasa_interes: f64,

    /// Term length in periods, always > 0
    pub plazo: i64,

    pub fecha_otorgamiento: NaiveDate,
}

/// Writable fields of a credit that passed full validation.
///
/// Only the validator builds this type, so every value already satisfies
/// the record invariants when it reaches the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NuevoCredito {
    /// Client name, already trimmed
    pub cliente: String,
    pub monto: f64,
    pub tasa_interes: f64,
    pub plazo: i64,
    pub fecha_otorgamiento: NaiveDate,
}

/// Fields that passed partial validation; absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditoParcial {
    pub cliente: Option<String>,
    pub monto: Option<f64>,
    pub tasa_interes: Option<f64>,
    pub plazo: Option<i64>,
    pub fecha_otorgamiento: Option<NaiveDate>,
}

/// Response body for `GET /api/creditos/total`.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: f64,
}

/// One row of `GET /api/creditos/por_cliente`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct ClienteTotal {
    pub cliente: String,
    pub total: f64,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
