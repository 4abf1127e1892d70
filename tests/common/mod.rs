//! Shared setup for integration tests: a router backed by a fresh SQLite file.

#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use credito_registry::db::{self, DbPool};
use serde_json::Value;
use tower::ServiceExt;

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "credito-registry-{}-{}-{}.sqlite",
            std::process::id(),
            nanos,
            NEXT_DB.fetch_add(1, Ordering::Relaxed)
        ));

        let database_url = format!("sqlite:{}", path.display());
        let pool = db::create_pool(&database_url, 5)
            .await
            .expect("failed to open test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let router = credito_registry::router::build_router(pool.clone());

        Self { router, pool, path }
    }

    /// Send a request and return the status with the raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        (status, body.to_vec())
    }

    /// Send a request with an optional JSON body and decode a JSON response.
    pub async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let (status, bytes) = self.send(request).await;
        let value = serde_json::from_slice(&bytes).expect("response body was not JSON");
        (status, value)
    }

    /// Send a form-encoded body and decode a JSON response.
    pub async fn form(&self, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");

        let (status, bytes) = self.send(request).await;
        let value = serde_json::from_slice(&bytes).expect("response body was not JSON");
        (status, value)
    }

    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM creditos")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let path = self.path.display().to_string();
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{path}{suffix}"));
        }
    }
}

pub fn credito(cliente: &str, monto: f64) -> Value {
    serde_json::json!({
        "cliente": cliente,
        "monto": monto,
        "tasa_interes": 5,
        "plazo": 12,
        "fecha_otorgamiento": "2024-01-15"
    })
}
