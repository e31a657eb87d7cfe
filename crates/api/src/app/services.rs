//! Service wiring: the upstream client plus the two operations handlers need.

use std::sync::Arc;

use books_infra::{BooksClient, BooksResult, EnvTokenProvider, TokenProvider};
use books_invoicing::{Collection, CollectionPage, CreatedInvoice, InvoiceDraft};

use crate::app::errors::ApiError;
use crate::config::ServerConfig;

/// Shared, immutable state behind every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    books: BooksClient,
}

impl AppServices {
    pub fn new(books: BooksClient) -> Self {
        Self { books }
    }

    /// Fetch one upstream collection and unwrap it for the frontend.
    pub async fn list(&self, collection: Collection) -> Result<CollectionPage, ApiError> {
        let raw = self.books.list(collection).await.inspect_err(|e| {
            tracing::warn!(%collection, error = %e, "upstream list failed");
        })?;

        let page = CollectionPage::from_response(collection, raw).inspect_err(|e| {
            tracing::warn!(%collection, error = %e, "upstream list had unexpected shape");
        })?;

        tracing::debug!(%collection, count = page.count(), "listed");
        Ok(page)
    }

    /// Forward a validated draft to Zoho Books.
    ///
    /// Failures after the request was attempted carry upstream details;
    /// failures before it (auth headers) are reported as plain errors.
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<CreatedInvoice, ApiError> {
        match self.books.create_invoice(draft).await {
            Ok(raw) => {
                let created = CreatedInvoice::from_response(&raw).inspect_err(|e| {
                    tracing::warn!(error = %e, "upstream create response had unexpected shape");
                })?;
                tracing::info!(
                    invoice_id = %created.invoice_id,
                    invoice_number = %created.invoice_number,
                    "invoice created"
                );
                Ok(created)
            }
            Err(e) if e.is_upstream() => {
                tracing::warn!(error = %e, "upstream rejected invoice");
                Err(ApiError::CreateInvoice(e))
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not prepare upstream request");
                Err(ApiError::Upstream(e))
            }
        }
    }
}

/// Build services from configuration (used by `main.rs`).
pub fn build_services(config: &ServerConfig) -> BooksResult<AppServices> {
    let tokens: Arc<dyn TokenProvider> = Arc::new(EnvTokenProvider::new(
        config.api_domain.clone(),
        config.access_token.clone(),
        config.organization_id.clone(),
    ));
    build_services_with(tokens, config.upstream_timeout)
}

/// Build services around an arbitrary token provider (tests, custom auth).
pub fn build_services_with(
    tokens: Arc<dyn TokenProvider>,
    timeout: std::time::Duration,
) -> BooksResult<AppServices> {
    Ok(AppServices::new(BooksClient::new(tokens, timeout)?))
}
