//! Credit record HTTP handlers.
//!
//! This module implements the credit API endpoints:
//! - GET /api/creditos - List all credits, newest first
//! - POST /api/creditos - Create a credit
//! - GET /api/creditos/{id} - Get one credit
//! - PUT /api/creditos/{id} - Overwrite a credit
//! - DELETE /api/creditos/{id} - Delete a credit
//! - GET /api/creditos/total - Sum of all amounts
//! - GET /api/creditos/por_cliente - Sum of amounts per client
//!
//! Write endpoints accept either a JSON object or a form-encoded body.

use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::IntoResponse,
};

use crate::{
    db::DbConn,
    error::AppError,
    models::{
        credito::{ClienteTotal, Credito, DeleteResponse, TotalResponse},
        payload::Payload,
    },
    services::{credito_service, validation},
};

/// Credit id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a stored credit, so it is
/// answered with the same 404 as an unknown id.
pub struct CreditoId(pub i64);

impl<S> FromRequestParts<S> for CreditoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::CreditoNotFound)?;

        Ok(Self(id))
    }
}

/// List all credits.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "id": 2, "cliente": "Beto", "monto": 50.0, "tasa_interes": 3.0, "plazo": 6, "fecha_otorgamiento": "2024-02-01" },
///   { "id": 1, "cliente": "Ana", "monto": 1000.0, "tasa_interes": 5.0, "plazo": 12, "fecha_otorgamiento": "2024-01-15" }
/// ]
/// ```
pub async fn list_creditos(DbConn(mut conn): DbConn) -> Result<Json<Vec<Credito>>, AppError> {
    let creditos = credito_service::list(&mut conn).await?;

    Ok(Json(creditos))
}

/// Create a credit.
///
/// # Request Body
///
/// ```json
/// {
///   "cliente": "Ana",
///   "monto": 1000,
///   "tasa_interes": 5,
///   "plazo": 12,
///   "fecha_otorgamiento": "2024-01-15"
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: the stored credit, including its assigned `id`
/// - **400 Bad Request**: `{"error": "..."}` naming the first invalid field
pub async fn create_credito(
    DbConn(mut conn): DbConn,
    payload: Payload,
) -> Result<impl IntoResponse, AppError> {
    let nuevo = validation::validate_full(&payload)?;
    let credito = credito_service::insert(&mut conn, nuevo).await?;

    Ok((StatusCode::CREATED, Json(credito)))
}

/// Get a single credit.
///
/// # Response
///
/// - **200 OK**: the credit
/// - **404 Not Found**: `{"error": "Crédito no encontrado"}`
pub async fn get_credito(
    DbConn(mut conn): DbConn,
    CreditoId(id): CreditoId,
) -> Result<Json<Credito>, AppError> {
    let credito = credito_service::find(&mut conn, id).await?;

    Ok(Json(credito))
}

/// Overwrite every field of a credit.
///
/// The body must carry all five fields, exactly as for creation. Validation
/// runs before the existence check, so an invalid body is a 400 even for an
/// unknown id.
///
/// # Response
///
/// - **200 OK**: the updated credit
/// - **400 Bad Request**: validation failure
/// - **404 Not Found**: `{"error": "Crédito no encontrado"}`
pub async fn update_credito(
    DbConn(mut conn): DbConn,
    CreditoId(id): CreditoId,
    payload: Payload,
) -> Result<Json<Credito>, AppError> {
    let nuevo = validation::validate_full(&payload)?;
    let credito = credito_service::update(&mut conn, id, nuevo).await?;

    Ok(Json(credito))
}

/// Delete a credit.
///
/// # Response
///
/// - **200 OK**: `{"ok": true}`
/// - **404 Not Found**: `{"error": "Crédito no encontrado"}`
pub async fn delete_credito(
    DbConn(mut conn): DbConn,
    CreditoId(id): CreditoId,
) -> Result<Json<DeleteResponse>, AppError> {
    credito_service::delete(&mut conn, id).await?;

    Ok(Json(DeleteResponse { ok: true }))
}

/// Sum of `monto` across all credits.
///
/// # Response (200 OK)
///
/// ```json
/// { "total": 1000.0 }
/// ```
pub async fn total_creditos(DbConn(mut conn): DbConn) -> Result<Json<TotalResponse>, AppError> {
    let total = credito_service::total(&mut conn).await?;

    Ok(Json(TotalResponse { total }))
}

/// Sum of `monto` grouped by client, largest first.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "cliente": "Ana", "total": 300.0 },
///   { "cliente": "Beto", "total": 50.0 }
/// ]
/// ```
pub async fn creditos_por_cliente(
    DbConn(mut conn): DbConn,
) -> Result<Json<Vec<ClienteTotal>>, AppError> {
    let totales = credito_service::por_cliente(&mut conn).await?;

    Ok(Json(totales))
}
