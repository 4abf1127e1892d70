//! Credit storage service - all SQL against the `creditos` table.
//!
//! Every function runs on the connection the current request acquired (see
//! [`crate::db::DbConn`]). Mutations run inside an explicit transaction and
//! are committed before returning; an early return drops the transaction,
//! which rolls it back.
//!
//! All user-supplied values are bound as parameters, never interpolated.

use sqlx::{Connection, SqliteConnection};

use crate::{
    error::AppError,
    models::credito::{ClienteTotal, Credito, NuevoCredito},
};

const SELECT_CREDITO: &str = r#"
    SELECT id, cliente, monto, tasa_interes, plazo, fecha_otorgamiento
    FROM creditos
    WHERE id = ?
"#;

/// List every credit, newest id first.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Credito>, AppError> {
    let creditos = sqlx::query_as::<_, Credito>(
        r#"
        SELECT id, cliente, monto, tasa_interes, plazo, fecha_otorgamiento
        FROM creditos
        ORDER BY id DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(creditos)
}

/// Fetch one credit by id.
///
/// # Errors
///
/// - `CreditoNotFound`: no row has this id
pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Credito, AppError> {
    sqlx::query_as::<_, Credito>(SELECT_CREDITO)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(AppError::CreditoNotFound)
}

/// Whether a credit with this id exists.
///
/// Update and delete do not call this: they detect a missing id from the
/// affected row count so the write is the first statement of their
/// transaction.
pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM creditos WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(found.is_some())
}

/// Insert a validated credit and return the stored row with its new id.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Insert the row
/// 3. Read it back by the assigned rowid
/// 4. Commit
pub async fn insert(conn: &mut SqliteConnection, nuevo: NuevoCredito) -> Result<Credito, AppError> {
    let mut tx = conn.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO creditos (cliente, monto, tasa_interes, plazo, fecha_otorgamiento)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(nuevo.cliente)
    .bind(nuevo.monto)
    .bind(nuevo.tasa_interes)
    .bind(nuevo.plazo)
    .bind(nuevo.fecha_otorgamiento)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    let credito = sqlx::query_as::<_, Credito>(SELECT_CREDITO)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(id, cliente = %credito.cliente, "credito created");
    Ok(credito)
}

/// Overwrite every writable field of an existing credit.
///
/// # Errors
///
/// - `CreditoNotFound`: no row has this id; the empty transaction is rolled back
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    nuevo: NuevoCredito,
) -> Result<Credito, AppError> {
    let mut tx = conn.begin().await?;

    // Must stay the first statement: upgrading a read lock to a write lock
    // fails with SQLITE_BUSY without waiting on the busy timeout.
    let updated = sqlx::query(
        r#"
        UPDATE creditos
        SET cliente = ?, monto = ?, tasa_interes = ?, plazo = ?, fecha_otorgamiento = ?
        WHERE id = ?
        "#,
    )
    .bind(nuevo.cliente)
    .bind(nuevo.monto)
    .bind(nuevo.tasa_interes)
    .bind(nuevo.plazo)
    .bind(nuevo.fecha_otorgamiento)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(AppError::CreditoNotFound);
    }

    let credito = sqlx::query_as::<_, Credito>(SELECT_CREDITO)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(id, "credito updated");
    Ok(credito)
}

/// Permanently remove a credit.
///
/// # Errors
///
/// - `CreditoNotFound`: no row has this id
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
    let mut tx = conn.begin().await?;

    // First statement of the transaction, as in `update`
    let deleted = sqlx::query("DELETE FROM creditos WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::CreditoNotFound);
    }

    tx.commit().await?;

    tracing::info!(id, "credito deleted");
    Ok(())
}

/// Sum of `monto` over all credits; 0 when the table is empty.
pub async fn total(conn: &mut SqliteConnection) -> Result<f64, AppError> {
    let total: f64 =
        sqlx::query_scalar("SELECT CAST(COALESCE(SUM(monto), 0) AS REAL) AS total FROM creditos")
            .fetch_one(&mut *conn)
            .await?;

    Ok(total)
}

/// Sum of `monto` per client, largest total first.
pub async fn por_cliente(conn: &mut SqliteConnection) -> Result<Vec<ClienteTotal>, AppError> {
    let totales = sqlx::query_as::<_, ClienteTotal>(
        r#"
        SELECT cliente, CAST(SUM(monto) AS REAL) AS total
        FROM creditos
        GROUP BY cliente
        ORDER BY total DESC, cliente ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(totales)
}
