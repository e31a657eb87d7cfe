use std::sync::Arc;

use axum::{body::Bytes, extract::Extension, http::HeaderMap, Json};
use serde_json::Value;

use books_core::DomainError;
use books_invoicing::{Collection, InvoiceDraft};

use crate::app::dto::CreateInvoiceResponse;
use crate::app::errors::ApiError;
use crate::app::routes::common::{is_json_content_type, list_collection};
use crate::app::services::AppServices;
use crate::context::RequestContext;

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Value>, ApiError> {
    list_collection(&services, Collection::Invoices).await
}

/// Validate the body, forward the whitelisted fields, report id/number.
///
/// The raw body is taken as bytes so a wrong content type or malformed JSON
/// gets our envelope rather than the extractor's plain-text rejection.
pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateInvoiceResponse>, ApiError> {
    let parsed = if is_json_content_type(&headers) {
        InvoiceDraft::from_slice(&body)
    } else {
        Err(DomainError::invalid_body("expected Content-Type: application/json"))
    };

    let draft = parsed.inspect_err(|e| {
        tracing::info!(request_id = %ctx.request_id(), error = %e, "rejected invoice request");
    })?;

    let created = services.create_invoice(&draft).await?;
    Ok(Json(created.into()))
}
