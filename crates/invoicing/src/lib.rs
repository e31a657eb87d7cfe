//! Invoicing request/response shaping.
//!
//! This crate contains the rules for what a create-invoice request must carry
//! and how upstream Zoho Books payloads are unwrapped for the frontend,
//! implemented purely as deterministic logic (no IO, no HTTP).

pub mod collection;
pub mod invoice;

pub use collection::{Collection, CollectionPage};
pub use invoice::{CreatedInvoice, InvoiceDraft, OPTIONAL_FIELDS, REQUIRED_FIELDS};
