use axum::{
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde_json::Value;

use books_invoicing::Collection;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// Shared body of the three list handlers.
pub async fn list_collection(
    services: &AppServices,
    collection: Collection,
) -> Result<Json<Value>, ApiError> {
    let page = services.list(collection).await?;
    Ok(Json(page.to_json()))
}

/// Whether a `Content-Type` value declares a JSON body
/// (`application/json` or an `application/*+json` subtype, parameters ignored).
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
