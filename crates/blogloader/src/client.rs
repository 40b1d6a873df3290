//! HTTP plumbing shared by every loader
//!
//! One backend call per operation, no retries and no cache. Failures go
//! through [`classify_failure`] so the development mock fallback is decided in
//! exactly one place.

use blogloader_core::endpoints::ApiRequest;
use blogloader_core::policy::{classify_failure, FailureAction};
use blogloader_core::post::NormalizeError;
use serde_json::Value;

use crate::config::BlogConfig;
use crate::error::{Error, Result};

/// Blog API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    config: BlogConfig,
}

/// Why a call produced no usable JSON body
#[derive(Debug)]
enum FetchFailure {
    /// The backend answered with a non-success status
    Status { status: u16, body: String },
    /// No response at all (connection refused, timeout, ...)
    Transport(String),
    /// A success response whose body is not JSON
    Decode(String),
}

impl FetchFailure {
    fn status(&self) -> Option<u16> {
        match self {
            FetchFailure::Status { status, .. } => Some(*status),
            FetchFailure::Transport(_) | FetchFailure::Decode(_) => None,
        }
    }

    fn message(&self, url: &str) -> String {
        match self {
            FetchFailure::Status { status, body } if body.is_empty() => {
                format!("API request to {url} failed with status {status}")
            }
            FetchFailure::Status { status, body } => {
                format!("API request to {url} failed with status {status}: {body}")
            }
            FetchFailure::Transport(e) => format!("Failed to send request to {url}: {e}"),
            FetchFailure::Decode(e) => format!("Failed to parse response from {url}: {e}"),
        }
    }
}

impl BlogClient {
    pub fn new(config: BlogConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Build a client from `BLOG_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(BlogConfig::from_env()?)
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    async fn fetch_json(&self, request: &ApiRequest) -> std::result::Result<Value, FetchFailure> {
        let url = request.url(&self.config.api_url);
        log::debug!("GET {} {:?}", url, request.query);

        let response = self
            .http
            .get(&url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| FetchFailure::Decode(e.to_string()))
    }

    /// Run one call and reshape its body, applying the failure policy
    ///
    /// `resource` names what was asked for in a `NotFound` error. `fallback`
    /// is only consulted for a 404 in development; `None` from it means the
    /// mock data has nothing for this resource either.
    pub(crate) async fn load<T>(
        &self,
        request: &ApiRequest,
        resource: &str,
        parse: impl FnOnce(Value) -> std::result::Result<T, NormalizeError>,
        fallback: impl FnOnce() -> Option<T>,
    ) -> Result<T> {
        let failure = match self.fetch_json(request).await {
            Ok(body) => return parse(body).map_err(Error::from),
            Err(failure) => failure,
        };

        let url = request.url(&self.config.api_url);

        match classify_failure(failure.status(), self.config.environment) {
            FailureAction::UseMock => match fallback() {
                Some(mock) => {
                    log::warn!("{url} returned 404, serving mock data for {resource}");
                    Ok(mock)
                }
                None => Err(Error::NotFound(resource.to_string())),
            },
            FailureAction::NotFound => {
                log::error!("{}", failure.message(&url));
                Err(Error::NotFound(resource.to_string()))
            }
            FailureAction::Fail { status } => {
                let message = failure.message(&url);
                log::error!("{message}");
                Err(Error::UpstreamError { status, message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn_backend, unreachable_base_url};
    use axum::{http::StatusCode, routing::get, Router};
    use blogloader_core::endpoints;
    use blogloader_core::policy::Environment;

    fn identity(body: Value) -> std::result::Result<Value, NormalizeError> {
        Ok(body)
    }

    #[tokio::test]
    async fn test_server_error_is_upstream_error() {
        let router = Router::new().route(
            "/api/posts",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(spawn_backend(router).await, Environment::Development);

        let err = client
            .load(&endpoints::all_posts(), "/posts", identity, || None)
            .await
            .unwrap_err();

        match err {
            Error::UpstreamError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected UpstreamError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_statuses_keep_their_code() {
        let router = Router::new().route(
            "/api/posts",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let client = client_for(spawn_backend(router).await, Environment::Production);

        let err = client
            .load(&endpoints::all_posts(), "/posts", identity, || None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), 503);
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_500_even_in_development() {
        let client = client_for(unreachable_base_url().await, Environment::Development);

        let err = client
            .load(&endpoints::all_posts(), "/posts", identity, || {
                Some(Value::Null)
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UpstreamError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_reports_500() {
        let router = Router::new().route("/api/posts", get(|| async { "<html>oops</html>" }));
        let client = client_for(spawn_backend(router).await, Environment::Development);

        let err = client
            .load(&endpoints::all_posts(), "/posts", identity, || {
                Some(Value::Null)
            })
            .await
            .unwrap_err();

        match err {
            Error::UpstreamError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.starts_with("Failed to parse response"));
            }
            other => panic!("expected UpstreamError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_uses_fallback_only_in_development() {
        let base_url = spawn_backend(Router::new()).await;

        let dev = client_for(base_url.clone(), Environment::Development);
        let value = dev
            .load(&endpoints::tags(), "/tags", identity, || {
                Some(Value::from("mock"))
            })
            .await
            .unwrap();
        assert_eq!(value, Value::from("mock"));

        let prod = client_for(base_url, Environment::Production);
        let err = prod
            .load(&endpoints::tags(), "/tags", identity, || {
                Some(Value::from("mock"))
            })
            .await
            .unwrap_err();
        assert_eq!(err, Error::NotFound("/tags".to_string()));
    }

    #[tokio::test]
    async fn test_not_found_without_fallback_data() {
        let client = client_for(spawn_backend(Router::new()).await, Environment::Development);

        let err = client
            .load(&endpoints::post_by_slug("nope"), "nope", identity, || None)
            .await
            .unwrap_err();

        assert_eq!(err, Error::NotFound("nope".to_string()));
    }

    #[tokio::test]
    async fn test_parse_failures_are_malformed_records() {
        let router = Router::new().route("/api/posts", get(|| async { "[1, 2]" }));
        let client = client_for(spawn_backend(router).await, Environment::Production);

        let err = client
            .load(
                &endpoints::all_posts(),
                "/posts",
                |_| Err(NormalizeError::MalformedRecord("bad".to_string())),
                || None::<Value>,
            )
            .await
            .unwrap_err();

        assert_eq!(err, Error::MalformedRecord("bad".to_string()));
    }
}
