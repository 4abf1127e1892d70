//! `GET /health` - liveness plus a read against the `creditos` table.

use crate::{db::DbConn, error::AppError};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,

    /// Number of stored credits; proves the schema is in place
    pub creditos: i64,

    pub checked_at: DateTime<Utc>,
}

/// Counts the stored credits on the request connection.
///
/// ```json
/// { "status": "healthy", "creditos": 3, "checked_at": "2025-12-21T19:00:00Z" }
/// ```
///
/// A missing table or unreachable database yields the standard 500 body.
pub async fn health_check(DbConn(mut conn): DbConn) -> Result<Json<HealthResponse>, AppError> {
    let creditos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creditos")
        .fetch_one(&mut *conn)
        .await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        creditos,
        checked_at: Utc::now(),
    }))
}
