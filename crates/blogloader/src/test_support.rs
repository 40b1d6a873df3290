//! Stub backend for handler tests

use axum::Router;
use blogloader_core::policy::Environment;

use crate::client::BlogClient;
use crate::config::BlogConfig;

/// Serve `router` on an ephemeral local port and return the API base URL
///
/// Routes are expected under `/api`, mirroring the real deployment.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api")
}

/// A base URL nothing listens on
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/api")
}

pub(crate) fn client_for(base_url: String, environment: Environment) -> BlogClient {
    BlogClient::new(BlogConfig::new(base_url, environment)).unwrap()
}
