//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{
    ConversationApi, CounterexamplesApi, DialogNodesApi, EntitiesApi, ExamplesApi, IntentsApi,
    LogsApi, SynonymsApi, UserDataApi, ValuesApi, WorkspacesApi,
};
use crate::config::{Authenticator, RetryPolicy, DEFAULT_SERVICE_URL};
use crate::error::{Error, ErrorResponse, Result};
use crate::request::{RequestEnvelope, ResolvedRequest};
use crate::response::DetailedResponse;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Assistant v1 API client.
///
/// Cloning is cheap; clones share the underlying connection pool and
/// configuration, which is read-only once built.
///
/// # Example
///
/// ```no_run
/// use assistant_client::{AssistantClient, Authenticator};
/// use assistant_client::api::CreateIntentOptions;
///
/// # async fn example() -> assistant_client::Result<()> {
/// let client = AssistantClient::builder()
///     .base_url("https://api.us-south.assistant.watson.cloud.ibm.com")
///     .version("2021-06-14")
///     .authenticator(Authenticator::Bearer("token".into()))
///     .build()?;
///
/// let intent = client
///     .intents()
///     .create(CreateIntentOptions::new("W1", "greeting"))
///     .await?;
/// println!("{} -> {:?}", intent.status_code, intent.result.created);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AssistantClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API version date sent with every request.
    version: String,
    /// Request timeout.
    timeout: Duration,
    /// Per-request authentication.
    authenticator: Authenticator,
    /// Retry policy for idempotent requests.
    retry: Option<RetryPolicy>,
    /// The settings this client was built from.
    settings: ClientBuilder,
}

impl AssistantClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// API version date sent as the `version` query parameter.
    pub fn version(&self) -> &str {
        &self.inner.version
    }

    /// An independent copy of the settings this client was built from.
    ///
    /// Changing the returned builder never affects this client or requests
    /// already in flight.
    pub fn to_builder(&self) -> ClientBuilder {
        self.inner.settings.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the message and bulk-classify API.
    pub fn conversation(&self) -> ConversationApi {
        ConversationApi::new(self.clone())
    }

    /// Access the workspaces API.
    pub fn workspaces(&self) -> WorkspacesApi {
        WorkspacesApi::new(self.clone())
    }

    /// Access the intents API.
    pub fn intents(&self) -> IntentsApi {
        IntentsApi::new(self.clone())
    }

    /// Access the intent examples API.
    pub fn examples(&self) -> ExamplesApi {
        ExamplesApi::new(self.clone())
    }

    /// Access the counterexamples API.
    pub fn counterexamples(&self) -> CounterexamplesApi {
        CounterexamplesApi::new(self.clone())
    }

    /// Access the entities and mentions API.
    pub fn entities(&self) -> EntitiesApi {
        EntitiesApi::new(self.clone())
    }

    /// Access the entity values API.
    pub fn values(&self) -> ValuesApi {
        ValuesApi::new(self.clone())
    }

    /// Access the value synonyms API.
    pub fn synonyms(&self) -> SynonymsApi {
        SynonymsApi::new(self.clone())
    }

    /// Access the dialog nodes API.
    pub fn dialog_nodes(&self) -> DialogNodesApi {
        DialogNodesApi::new(self.clone())
    }

    /// Access the logs API.
    pub fn logs(&self) -> LogsApi {
        LogsApi::new(self.clone())
    }

    /// Access the user data API.
    pub fn user_data(&self) -> UserDataApi {
        UserDataApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request execution
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the full URL for a resolved path, adding `version` and the
    /// request's query parameters.
    pub(crate) fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let path = path.trim_start_matches('/');
        let mut url = self.inner.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", &self.inner.version);
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Send a request and decode the JSON response body into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: RequestEnvelope,
    ) -> Result<DetailedResponse<T>> {
        let request = request.finish()?;
        let response = self.execute(&request).await?;

        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let result = serde_json::from_slice(&bytes).map_err(Error::Decode)?;

        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Send a request whose response body carries nothing of interest.
    pub async fn send_empty(&self, request: RequestEnvelope) -> Result<DetailedResponse<()>> {
        let request = request.finish()?;
        let response = self.execute(&request).await?;

        Ok(DetailedResponse {
            status_code: response.status().as_u16(),
            headers: response.headers().clone(),
            result: (),
        })
    }

    /// Execute a resolved request, retrying idempotent ones per policy.
    async fn execute(&self, request: &ResolvedRequest) -> Result<reqwest::Response> {
        let url = self.url(&request.path, &request.query)?;
        let idempotent = matches!(request.method, Method::GET | Method::DELETE);

        let policy = match self.inner.retry {
            Some(policy) if idempotent => policy,
            _ => return self.execute_once(request, url).await,
        };

        let mut backoff = policy.initial_backoff;
        let mut attempt = 0;
        loop {
            match self.execute_once(request, url.clone()).await {
                Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        method = %request.method,
                        path = %request.path,
                        attempt,
                        max_retries = policy.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                result => return result,
            }
        }
    }

    async fn execute_once(&self, request: &ResolvedRequest, url: Url) -> Result<reqwest::Response> {
        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url)
            .timeout(self.inner.timeout);
        builder = self.inner.authenticator.apply(builder);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        tracing::debug!(status = response.status().as_u16(), "Received response");

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok());

        let message = body
            .clone()
            .and_then(|value| serde_json::from_value::<ErrorResponse>(value).ok())
            .and_then(|err| err.message())
            .unwrap_or_else(|| format!("HTTP {}", status));

        tracing::warn!(status, message = %message, "API request failed");
        Error::Api {
            status,
            message,
            body,
        }
    }
}

/// Builder for creating an [`AssistantClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    version: Option<String>,
    authenticator: Authenticator,
    timeout: Duration,
    headers: Vec<(String, String)>,
    gzip: bool,
    disable_ssl_verification: bool,
    retry: Option<RetryPolicy>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            version: None,
            authenticator: Authenticator::None,
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
            gzip: false,
            disable_ssl_verification: false,
            retry: None,
            user_agent: None,
        }
    }

    /// Set the service URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version date, e.g. `2021-06-14`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set how requests are authenticated.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = authenticator;
        self
    }

    #[cfg(test)]
    pub(crate) fn authenticator_ref(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several headers sent with every request.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Enable gzip response compression.
    pub fn gzip(mut self, enabled: bool) -> Self {
        self.gzip = enabled;
        self
    }

    /// Skip TLS certificate verification. Only meant for tests.
    pub fn disable_ssl_verification(mut self, disabled: bool) -> Self {
        self.disable_ssl_verification = disabled;
        self
    }

    /// Retry idempotent requests on transient failures.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AssistantClient> {
        let version = self
            .version
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("version is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Config(format!("Invalid header name: {}", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::Config(format!("Invalid value for header {}", name)))?;
            headers.insert(name, value);
        }

        // Build HTTP client
        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("assistant-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .gzip(self.gzip)
            .danger_accept_invalid_certs(self.disable_ssl_verification)
            .build()?;

        if self.disable_ssl_verification {
            tracing::warn!("TLS certificate verification is disabled");
        }

        Ok(AssistantClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                version,
                timeout: self.timeout,
                authenticator: self.authenticator.clone(),
                retry: self.retry,
                settings: self,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AssistantClient {
        ClientBuilder::new()
            .base_url("http://localhost:8080")
            .version("2021-06-14")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_version() {
        let result = ClientBuilder::new().base_url("http://localhost:8080").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_defaults_to_service_url() {
        let client = ClientBuilder::new().version("2021-06-14").build().unwrap();
        assert_eq!(client.base_url().as_str(), format!("{}/", DEFAULT_SERVICE_URL));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/instances/abc")
            .version("2021-06-14")
            .build()
            .unwrap();

        assert_eq!(
            client.base_url().as_str(),
            "http://localhost:8080/instances/abc/"
        );
    }

    #[test]
    fn test_builder_rejects_bad_header() {
        let result = ClientBuilder::new()
            .version("2021-06-14")
            .header("bad header", "x")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_url_building_adds_version() {
        let url = client().url("/v1/workspaces", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/workspaces?version=2021-06-14"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/instances/abc")
            .version("2021-06-14")
            .build()
            .unwrap();

        let url = client.url("/v1/logs", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/instances/abc/v1/logs?version=2021-06-14"
        );
    }

    #[test]
    fn test_unset_page_limit_is_absent_from_url() {
        let request = RequestEnvelope::get("/v1/workspaces")
            .query_opt("page_limit", None::<i64>)
            .query_opt("sort", Some("name"))
            .finish()
            .unwrap();

        let url = client().url(&request.path, &request.query).unwrap();
        assert_eq!(url.query(), Some("version=2021-06-14&sort=name"));
        assert!(url.query_pairs().all(|(k, _)| k != "page_limit"));
    }

    #[test]
    fn test_to_builder_is_independent() {
        let client = client();
        let derived = client
            .to_builder()
            .version("2020-04-01")
            .build()
            .unwrap();

        assert_eq!(client.version(), "2021-06-14");
        assert_eq!(derived.version(), "2020-04-01");
        assert_eq!(derived.base_url(), client.base_url());
    }
}
