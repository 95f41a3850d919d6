//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use assistant_client::{AssistantClient, Authenticator, ClientBuilder, RetryPolicy};
use wiremock::MockServer;

/// API version date used by every test client.
pub const VERSION: &str = "2021-06-14";

/// Bearer token used by every test client.
pub const TOKEN: &str = "test-token";

/// A mock service and a client pointed at it.
pub struct TestService {
    /// The mock server.
    pub server: MockServer,
    /// Client configured for the server.
    pub client: AssistantClient,
}

impl TestService {
    /// Start a mock service with the default client configuration.
    pub async fn start() -> Result<Self> {
        Self::start_with(|builder| builder).await
    }

    /// Start a mock service with a fast retry policy.
    pub async fn start_with_retry(max_retries: u32) -> Result<Self> {
        Self::start_with(|builder| {
            builder.retry(RetryPolicy {
                max_retries,
                initial_backoff: Duration::from_millis(10),
            })
        })
        .await
    }

    /// Start a mock service, adjusting the client builder first.
    pub async fn start_with(configure: impl FnOnce(ClientBuilder) -> ClientBuilder) -> Result<Self> {
        let server = MockServer::start().await;
        let builder = AssistantClient::builder()
            .base_url(server.uri())
            .version(VERSION)
            .authenticator(Authenticator::Bearer(TOKEN.to_string()))
            .timeout(Duration::from_secs(5));
        let client = configure(builder).build()?;
        Ok(Self { server, client })
    }

    /// Number of requests the server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
