use axum::{routing::get, Router};

pub mod common;
pub mod customers;
pub mod invoices;
pub mod items;
pub mod system;

/// Router for the JSON endpoints proxied to Zoho Books (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/invoices", get(invoices::list_invoices).post(invoices::create_invoice))
        .route("/items", get(items::list_items))
        .route("/customers", get(customers::list_customers))
}
