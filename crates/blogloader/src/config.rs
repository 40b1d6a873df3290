//! Client configuration
//!
//! Values come from the environment (`BLOG_API_URL`, `BLOG_ENV`,
//! `BLOG_TIMEOUT`) with CLI overrides applied on top.

use std::time::Duration;

use blogloader_core::policy::Environment;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "http://localhost/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Base URL every endpoint path is appended to
    pub api_url: String,
    /// Gates the development-only mock fallback
    pub environment: Environment,
    pub timeout: Duration,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: Environment::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BlogConfig {
    pub fn new(api_url: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_url: api_url.into(),
            environment,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables fall back to the defaults; set but invalid ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let environment = match lookup("BLOG_ENV") {
            Some(value) => value.parse::<Environment>().map_err(Error::Config)?,
            None => defaults.environment,
        };

        let timeout = match lookup("BLOG_TIMEOUT") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| Error::Config(format!("BLOG_TIMEOUT must be whole seconds: {e}")))?,
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: lookup("BLOG_API_URL").unwrap_or(defaults.api_url),
            environment,
            timeout,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        environment: Option<Environment>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(environment) = environment {
            self.environment = environment;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = BlogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.api_url, "http://localhost/api");
    }

    #[test]
    fn test_reads_variables() {
        let config = BlogConfig::from_lookup(lookup(&[
            ("BLOG_API_URL", "https://blog.example.com/api"),
            ("BLOG_ENV", "development"),
            ("BLOG_TIMEOUT", "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://blog.example.com/api");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = BlogConfig::from_lookup(lookup(&[("BLOG_ENV", "staging")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = BlogConfig::from_lookup(lookup(&[("BLOG_TIMEOUT", "soon")])).unwrap_err();
        assert!(err.to_string().contains("BLOG_TIMEOUT"));
    }

    #[test]
    fn test_overrides() {
        let config = BlogConfig::default().with_overrides(
            Some("http://127.0.0.1:8080/api".to_string()),
            Some(Environment::Development),
            None,
        );

        assert_eq!(config.api_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
