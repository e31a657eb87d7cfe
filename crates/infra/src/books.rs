//! Zoho Books REST v3 client.
//!
//! One request per call, no retries. The only shared state is the pooled
//! `reqwest::Client`.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use books_invoicing::{Collection, InvoiceDraft};

use crate::token::{TokenError, TokenProvider};

pub type BooksResult<T> = Result<T, BooksError>;

#[derive(Debug, Error)]
pub enum BooksError {
    /// Auth headers could not be produced.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Connection, timeout, or body read failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: String },

    /// Upstream answered 2xx but the body was not JSON.
    #[error("upstream returned malformed JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl BooksError {
    /// True when the failure happened while talking to Zoho Books (as opposed
    /// to before a request was ever sent).
    pub fn is_upstream(&self) -> bool {
        !matches!(self, BooksError::Token(_))
    }

    /// Best-effort detail for callers: the upstream body for a non-2xx
    /// response (even when empty), else this error's message.
    pub fn details(&self) -> String {
        match self {
            BooksError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl BooksClient {
    pub fn new(tokens: Arc<dyn TokenProvider>, timeout: Duration) -> BooksResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, tokens })
    }

    pub fn api_domain(&self) -> &str {
        self.tokens.api_domain()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/books/v3/{}", self.api_domain().trim_end_matches('/'), path)
    }

    /// `GET {domain}/books/v3/<collection>`; returns the raw upstream body.
    pub async fn list(&self, collection: Collection) -> BooksResult<Value> {
        let headers = self.tokens.headers()?;
        let url = self.url(collection.path());
        debug!(%url, "listing {collection}");
        self.send(self.http.get(url).headers(headers)).await
    }

    /// `POST {domain}/books/v3/invoices`; returns the raw upstream body.
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> BooksResult<Value> {
        let headers = self.tokens.headers()?;
        let url = self.url(Collection::Invoices.path());
        debug!(%url, "creating invoice");
        self.send(self.http.post(url).headers(headers).json(&draft.to_payload()))
            .await
    }

    async fn send(&self, req: RequestBuilder) -> BooksResult<Value> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(BooksError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|source| BooksError::Decode { source, body })
    }
}

impl core::fmt::Debug for BooksClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BooksClient")
            .field("api_domain", &self.api_domain())
            .finish()
    }
}
