use serde::Serialize;
use serde_json::{Map, Value};

use books_core::{DomainError, DomainResult};

/// Fields a create-invoice request must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 5] = ["customer_id", "date", "due_date", "currency_code", "line_items"];

/// Fields forwarded upstream only when the client supplied them.
pub const OPTIONAL_FIELDS: [&str; 1] = ["notes"];

/// A validated create-invoice request.
///
/// Values are opaque to the gateway: presence is checked, content is not.
/// Only the whitelisted fields survive construction, so anything else the
/// client sent never reaches Zoho Books.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    fields: Map<String, Value>,
}

impl InvoiceDraft {
    /// Validate a decoded request body.
    ///
    /// The first missing required field (in [`REQUIRED_FIELDS`] order) wins.
    pub fn from_json(body: Value) -> DomainResult<Self> {
        match body {
            Value::Object(map) => Self::from_map(map),
            other => Err(DomainError::invalid_body(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Validate raw request bytes.
    pub fn from_slice(bytes: &[u8]) -> DomainResult<Self> {
        let body: Value =
            serde_json::from_slice(bytes).map_err(|e| DomainError::invalid_body(e.to_string()))?;
        Self::from_json(body)
    }

    fn from_map(mut map: Map<String, Value>) -> DomainResult<Self> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !map.contains_key(**f)) {
            return Err(DomainError::MissingField(*missing));
        }

        let mut fields = Map::new();
        for name in REQUIRED_FIELDS.iter().chain(OPTIONAL_FIELDS.iter()) {
            if let Some(v) = map.remove(*name) {
                fields.insert((*name).to_string(), v);
            }
        }

        Ok(Self { fields })
    }

    /// Body sent to `POST /books/v3/invoices`.
    pub fn to_payload(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// The parts of a created invoice the frontend cares about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedInvoice {
    pub invoice_id: Value,
    pub invoice_number: Value,
}

impl CreatedInvoice {
    /// Extract id/number from the upstream create response.
    ///
    /// A response without an `invoice` key yields `null` id/number; an
    /// `invoice` (or response) that is not an object is a shape error.
    pub fn from_response(response: &Value) -> DomainResult<Self> {
        let response = response.as_object().ok_or_else(|| {
            DomainError::unexpected_shape(format!(
                "create response is {}, expected an object",
                kind_of(response)
            ))
        })?;

        let invoice = match response.get("invoice") {
            None => None,
            Some(Value::Object(inv)) => Some(inv),
            Some(other) => {
                return Err(DomainError::unexpected_shape(format!(
                    "`invoice` is {}, expected an object",
                    kind_of(other)
                )));
            }
        };

        let pick = |key: &str| {
            invoice
                .and_then(|inv| inv.get(key))
                .cloned()
                .unwrap_or(Value::Null)
        };

        Ok(Self {
            invoice_id: pick("invoice_id"),
            invoice_number: pick("invoice_number"),
        })
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
