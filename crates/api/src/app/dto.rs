use serde::Serialize;
use serde_json::Value;

use books_invoicing::CreatedInvoice;

pub const INVOICE_CREATED_MESSAGE: &str = "Invoice created successfully";

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
    pub invoice_id: Value,
    pub invoice_number: Value,
    pub message: &'static str,
}

impl From<CreatedInvoice> for CreateInvoiceResponse {
    fn from(created: CreatedInvoice) -> Self {
        Self {
            invoice_id: created.invoice_id,
            invoice_number: created.invoice_number,
            message: INVOICE_CREATED_MESSAGE,
        }
    }
}
