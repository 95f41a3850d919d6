//! Client configuration: service defaults, authentication, retry policy and
//! environment-based loading.

use std::fmt;
use std::time::Duration;

use crate::client::ClientBuilder;
use crate::error::{Error, Result};

/// Default service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";

/// Default service name, used as the environment variable prefix.
pub const DEFAULT_SERVICE_NAME: &str = "conversation";

/// How requests are authenticated.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Authenticator {
    /// No authentication header.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// HTTP basic authentication.
    Basic {
        /// Username.
        username: String,
        /// Password.
        password: String,
    },
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authenticator::None => f.write_str("None"),
            Authenticator::Bearer(_) => f.write_str("Bearer(***)"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

impl Authenticator {
    /// Apply this authenticator to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Authenticator::None => request,
            Authenticator::Bearer(token) => request.bearer_auth(token),
            Authenticator::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

/// Retry policy for idempotent requests (GET, DELETE).
///
/// Retries happen only for transient failures: connect errors, timeouts,
/// 429 and 5xx responses. Backoff doubles after each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl ClientBuilder {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with the service name upper-cased, with `-`
    /// replaced by `_` (`conversation` reads `CONVERSATION_URL`, ...):
    ///
    /// - `<NAME>_URL`: service URL
    /// - `<NAME>_VERSION`: API version date
    /// - `<NAME>_AUTH_TYPE`: `bearertoken`, `basic` or `noauth`
    /// - `<NAME>_BEARER_TOKEN`
    /// - `<NAME>_USERNAME` / `<NAME>_PASSWORD`
    /// - `<NAME>_DISABLE_SSL`: `true` disables certificate verification
    pub fn from_env(service_name: &str) -> Result<Self> {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Like [`ClientBuilder::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.to_uppercase().replace('-', "_");
        let var = |suffix: &str| {
            lookup(&format!("{}_{}", prefix, suffix)).filter(|value| !value.is_empty())
        };

        let mut builder = ClientBuilder::new();

        if let Some(url) = var("URL") {
            builder = builder.base_url(url);
        }
        if let Some(version) = var("VERSION") {
            builder = builder.version(version);
        }
        if let Some(disable) = var("DISABLE_SSL") {
            builder = builder.disable_ssl_verification(disable.eq_ignore_ascii_case("true"));
        }

        let auth_type = var("AUTH_TYPE").map(|t| t.to_lowercase());
        let authenticator = match auth_type.as_deref() {
            Some("bearertoken") => {
                let token = var("BEARER_TOKEN").ok_or_else(|| {
                    Error::Config(format!("{}_BEARER_TOKEN is required", prefix))
                })?;
                Authenticator::Bearer(token)
            }
            Some("basic") => {
                let username = var("USERNAME")
                    .ok_or_else(|| Error::Config(format!("{}_USERNAME is required", prefix)))?;
                let password = var("PASSWORD")
                    .ok_or_else(|| Error::Config(format!("{}_PASSWORD is required", prefix)))?;
                Authenticator::Basic { username, password }
            }
            Some("noauth") => Authenticator::None,
            Some(other) => {
                return Err(Error::Config(format!(
                    "unsupported {}_AUTH_TYPE: {}",
                    prefix, other
                )));
            }
            // No explicit type: infer from whatever credentials are present.
            None => match (var("BEARER_TOKEN"), var("USERNAME"), var("PASSWORD")) {
                (Some(token), _, _) => Authenticator::Bearer(token),
                (None, Some(username), Some(password)) => {
                    Authenticator::Basic { username, password }
                }
                _ => Authenticator::None,
            },
        };

        tracing::debug!(service = service_name, "Loaded client configuration from environment");
        Ok(builder.authenticator(authenticator))
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
    fn test_from_lookup_reads_prefixed_vars() {
        let builder = ClientBuilder::from_lookup(
            "my-assistant",
            lookup(&[
                ("MY_ASSISTANT_URL", "https://example.com/instances/1"),
                ("MY_ASSISTANT_VERSION", "2021-06-14"),
                ("MY_ASSISTANT_AUTH_TYPE", "bearertoken"),
                ("MY_ASSISTANT_BEARER_TOKEN", "tok"),
            ]),
        )
        .unwrap();

        let client = builder.build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/instances/1/");
        assert_eq!(client.version(), "2021-06-14");
        assert_eq!(
            client.to_builder().authenticator_ref(),
            &Authenticator::Bearer("tok".to_string())
        );
    }

    #[test]
    fn test_from_lookup_basic_requires_password() {
        let err = ClientBuilder::from_lookup(
            DEFAULT_SERVICE_NAME,
            lookup(&[
                ("CONVERSATION_AUTH_TYPE", "basic"),
                ("CONVERSATION_USERNAME", "user"),
            ]),
        )
        .unwrap_err();

        assert!(err.to_string().contains("CONVERSATION_PASSWORD"));
    }

    #[test]
    fn test_from_lookup_infers_basic() {
        let builder = ClientBuilder::from_lookup(
            DEFAULT_SERVICE_NAME,
            lookup(&[
                ("CONVERSATION_USERNAME", "user"),
                ("CONVERSATION_PASSWORD", "pass"),
            ]),
        )
        .unwrap();

        assert_eq!(
            builder.authenticator_ref(),
            &Authenticator::Basic {
                username: "user".to_string(),
                password: "pass".to_string(),
            }
        );
    }

    #[test]
    fn test_from_lookup_rejects_unknown_auth_type() {
        let err = ClientBuilder::from_lookup(
            DEFAULT_SERVICE_NAME,
            lookup(&[("CONVERSATION_AUTH_TYPE", "iam")]),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_authenticator_debug_redacts_secrets() {
        let auth = Authenticator::Basic {
            username: "user".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", auth);
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", Authenticator::Bearer("secret".to_string()));
        assert!(!rendered.contains("secret"));
    }
}
