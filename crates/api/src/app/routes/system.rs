use axum::{http::StatusCode, response::Html};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Frontend page; everything it shows comes from the `/api` routes.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
