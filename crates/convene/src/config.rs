//! Client construction options and resolved configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::debug::{DebugContext, DebugHook};
use crate::error::Error;

/// Production API host.
pub const BASE_URL: &str = "https://public-api.convene.events";

/// Default per-call deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Options accepted by [`crate::Client::new`]. Only the API key is
/// required; everything else falls back to production defaults.
#[derive(Clone, Default)]
pub struct ClientOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    pub debug: Option<DebugHook>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientOptions {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
            debug: None,
        }
    }

    /// Point the client at a different host, e.g. a staging deployment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-call deadline. Elapsing it aborts the in-flight request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Install an observability hook, invoked once per logical call.
    pub fn debug<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DebugContext) + Send + Sync + 'static,
    {
        self.debug = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug.is_some())
            .finish()
    }
}

/// Resolved, immutable configuration shared by all calls on a client.
#[derive(Clone)]
pub(crate) struct Config {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
    pub debug: Option<DebugHook>,
}

impl Config {
    pub fn resolve(options: ClientOptions) -> Result<Self, Error> {
        let base = options.base_url.as_deref().unwrap_or(BASE_URL);
        let base_url = Url::parse(base)
            .map_err(|e| Error::other(format!("invalid base URL {base:?}: {e}")))?;
        Ok(Config {
            api_key: options.api_key,
            base_url,
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            debug: options.debug,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("debug", &self.debug.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = Config::resolve(ClientOptions::new("secret")).unwrap();
        assert_eq!(config.base_url.as_str(), "https://public-api.convene.events/");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
        assert!(config.debug.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let options = ClientOptions::new("secret")
            .base_url("https://staging.convene.test")
            .timeout(Duration::from_secs(5));
        let config = Config::resolve(options).unwrap();
        assert_eq!(config.base_url.host_str(), Some("staging.convene.test"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_base_url_is_usage_error() {
        let error = Config::resolve(ClientOptions::new("secret").base_url("not a url"))
            .expect_err("parse must fail");
        assert!(matches!(error, Error::Other { .. }));
        assert_eq!(error.status(), None);
    }
}
