//! HTTP route table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, handlers};

/// Build the application router with all routes and middleware.
///
/// The pool is shared with every handler as router state; each request
/// checks out its own connection from it through [`crate::db::DbConn`].
pub fn build_router(pool: DbPool) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/creditos",
            get(handlers::creditos::list_creditos).post(handlers::creditos::create_credito),
        )
        // Static segments take priority over `{id}`
        .route("/api/creditos/total", get(handlers::creditos::total_creditos))
        .route(
            "/api/creditos/por_cliente",
            get(handlers::creditos::creditos_por_cliente),
        )
        .route(
            "/api/creditos/{id}",
            get(handlers::creditos::get_credito)
                .put(handlers::creditos::update_credito)
                .delete(handlers::creditos::delete_credito),
        );

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/static/main.js", get(handlers::pages::main_js))
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
