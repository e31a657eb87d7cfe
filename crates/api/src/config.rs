//! Server configuration, read from the environment at startup.

use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_API_DOMAIN: &str = "https://www.zohoapis.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub api_domain: String,
    pub access_token: Option<String>,
    pub organization_id: Option<String>,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: "UPSTREAM_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            api_domain: get("ZOHO_API_DOMAIN").unwrap_or_else(|| DEFAULT_API_DOMAIN.to_string()),
            access_token: get("ZOHO_ACCESS_TOKEN"),
            organization_id: get("ZOHO_ORGANIZATION_ID"),
            upstream_timeout,
        })
    }
}

impl core::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_domain", &self.api_domain)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("organization_id", &self.organization_id)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(c.api_domain, DEFAULT_API_DOMAIN);
        assert_eq!(c.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
        assert!(c.access_token.is_none());
        assert!(c.organization_id.is_none());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let c = cfg(&[
            ("BIND_ADDR", "127.0.0.1:8081"),
            ("ZOHO_API_DOMAIN", "https://www.zohoapis.eu"),
            ("ZOHO_ACCESS_TOKEN", " tok "),
            ("ZOHO_ORGANIZATION_ID", "600"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(c.bind_addr.port(), 8081);
        assert_eq!(c.api_domain, "https://www.zohoapis.eu");
        assert_eq!(c.access_token.as_deref(), Some("tok"));
        assert_eq!(c.organization_id.as_deref(), Some("600"));
        assert_eq!(c.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            cfg(&[("BIND_ADDR", "nope")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            cfg(&[("UPSTREAM_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            cfg(&[("UPSTREAM_TIMEOUT_SECS", "ten")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let c = cfg(&[("ZOHO_ACCESS_TOKEN", "hunter2")]).unwrap();
        assert!(!format!("{c:?}").contains("hunter2"));
    }
}
