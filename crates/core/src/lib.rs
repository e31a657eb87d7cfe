//! `books-core` — shared building blocks for the gateway.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::RequestId;
