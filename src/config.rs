use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/adexchangebuyer/v1.4";

/// Connection settings shared read-only by every tool.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: Url,
    api_key: Option<String>,
    bearer_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".into(),
            });
        }
        Ok(Self {
            base_url: parsed,
            api_key: None,
            bearer_token: None,
        })
    }

    /// Reads `API_BASE_URL`, `API_KEY` and `BEARER_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let mut config = Self::new(&base)?;
        if let Ok(key) = std::env::var("API_KEY") {
            config = config.with_api_key(key);
        }
        if let Ok(token) = std::env::var("BEARER_TOKEN") {
            config = config.with_bearer_token(token);
        }
        Ok(config)
    }

    /// Sent as the `key` query parameter. An empty key is ignored.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key: String = key.into();
        self.api_key = Some(key).filter(|k| !k.is_empty());
        self
    }

    /// Sent as the `oauth_token` query parameter. An empty token is ignored.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token: String = token.into();
        self.bearer_token = Some(token).filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ApiConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_url_without_path() {
        assert!(ApiConfig::new("mailto:ads@example.com").is_err());
    }

    #[test]
    fn empty_credentials_are_not_configured() {
        let config = ApiConfig::new(DEFAULT_BASE_URL)
            .unwrap()
            .with_api_key("")
            .with_bearer_token("");
        assert_eq!(config.api_key(), None);
        assert_eq!(config.bearer_token(), None);
    }

    #[test]
    fn debug_redacts_credentials() {
        let config = ApiConfig::new(DEFAULT_BASE_URL)
            .unwrap()
            .with_api_key("secret-key")
            .with_bearer_token("secret-token");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret-key"));
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("<redacted>"));
    }
}
