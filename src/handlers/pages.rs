//! Landing page and its script, bundled into the binary.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const MAIN_JS: &str = include_str!("../../static/main.js");

/// `GET /` - credit management page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/main.js`
pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
