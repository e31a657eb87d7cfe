//! Auth header / API domain provider for Zoho Books.
//!
//! Acquiring and refreshing OAuth tokens is someone else's job; the gateway
//! only needs "give me headers" and "give me the API origin".

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

/// Zoho Books organisation selector header.
pub const ORGANIZATION_HEADER: &str = "x-com-zoho-books-organizationid";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("no Zoho access token configured")]
    MissingAccessToken,

    #[error("invalid auth header value: {0}")]
    InvalidHeader(String),
}

/// Supplies request headers and the API origin for upstream calls.
pub trait TokenProvider: Send + Sync {
    /// Headers that authenticate a single request against Zoho Books.
    fn headers(&self) -> Result<HeaderMap, TokenError>;

    /// API origin, e.g. `https://www.zohoapis.com`.
    fn api_domain(&self) -> &str;
}

/// Token provider backed by static configuration (no refresh).
#[derive(Clone)]
pub struct EnvTokenProvider {
    api_domain: String,
    access_token: Option<String>,
    organization_id: Option<String>,
}

impl EnvTokenProvider {
    pub fn new(
        api_domain: impl Into<String>,
        access_token: Option<String>,
        organization_id: Option<String>,
    ) -> Self {
        Self {
            api_domain: api_domain.into().trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            organization_id: organization_id.filter(|o| !o.trim().is_empty()),
        }
    }
}

impl core::fmt::Debug for EnvTokenProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnvTokenProvider")
            .field("api_domain", &self.api_domain)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

impl TokenProvider for EnvTokenProvider {
    fn headers(&self) -> Result<HeaderMap, TokenError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(TokenError::MissingAccessToken)?;

        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Zoho-oauthtoken {token}"))
            .map_err(|_| TokenError::InvalidHeader("access token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(org) = &self.organization_id {
            let value = HeaderValue::from_str(org)
                .map_err(|_| TokenError::InvalidHeader("organization id".to_string()))?;
            headers.insert(HeaderName::from_static(ORGANIZATION_HEADER), value);
        }

        Ok(headers)
    }

    fn api_domain(&self) -> &str {
        &self.api_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_oauth_token_and_org() {
        let p = EnvTokenProvider::new(
            "https://www.zohoapis.com",
            Some("abc".to_string()),
            Some("42".to_string()),
        );
        let h = p.headers().unwrap();
        assert_eq!(h.get(AUTHORIZATION).unwrap(), "Zoho-oauthtoken abc");
        assert_eq!(h.get(ORGANIZATION_HEADER).unwrap(), "42");
    }

    #[test]
    fn org_header_is_optional() {
        let p = EnvTokenProvider::new("https://www.zohoapis.eu", Some("abc".to_string()), None);
        let h = p.headers().unwrap();
        assert!(h.get(ORGANIZATION_HEADER).is_none());
    }

    #[test]
    fn missing_or_blank_token_is_an_error() {
        let p = EnvTokenProvider::new("https://www.zohoapis.com", None, None);
        assert_eq!(p.headers().unwrap_err(), TokenError::MissingAccessToken);

        let p = EnvTokenProvider::new("https://www.zohoapis.com", Some("  ".to_string()), None);
        assert_eq!(p.headers().unwrap_err(), TokenError::MissingAccessToken);
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let p = EnvTokenProvider::new("https://www.zohoapis.com", Some("a\nb".to_string()), None);
        assert!(matches!(p.headers(), Err(TokenError::InvalidHeader(_))));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_domain() {
        let p = EnvTokenProvider::new("https://www.zohoapis.com/", None, None);
        assert_eq!(p.api_domain(), "https://www.zohoapis.com");
    }

    #[test]
    fn debug_redacts_token() {
        let p = EnvTokenProvider::new("https://www.zohoapis.com", Some("supersecret".to_string()), None);
        let dbg = format!("{p:?}");
        assert!(!dbg.contains("supersecret"));
        assert!(dbg.contains("[REDACTED]"));
    }
}
