use std::sync::Arc;

use axum::{extract::Extension, Json};
use serde_json::Value;

use books_invoicing::Collection;

use crate::app::errors::ApiError;
use crate::app::routes::common::list_collection;
use crate::app::services::AppServices;

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Value>, ApiError> {
    list_collection(&services, Collection::Customers).await
}
