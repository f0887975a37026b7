//! Client for the external account-creation service. The service owns
//! validation, duplicate handling and persistence; this side only reports
//! whether the call succeeded. Timeouts are enforced by the HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use super::{errors::RegistrationError, form::RegistrationRequest};
use crate::APP_USER_AGENT;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Maximum number of error body characters kept for logs.
const MAX_ERROR_CHARS: usize = 200;

/// The external registration capability.
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Create the account or fail; the reason is only used for logging.
    async fn sign_up(&self, request: &RegistrationRequest) -> Result<(), RegistrationError>;
}

/// `Registrar` backed by a JSON `POST` to the registration endpoint.
#[derive(Clone, Debug)]
pub struct HttpRegistrar {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrar {
    /// Build a registrar for `endpoint` with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the endpoint is not an http(s) URL or the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RegistrationError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| RegistrationError::Config(format!("Failed to build client: {err}")))?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Registrar for HttpRegistrar {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn sign_up(&self, request: &RegistrationRequest) -> Result<(), RegistrationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status.is_success() {
            debug!("Registration accepted: {status}");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RegistrationError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Parse and check the registration endpoint URL.
///
/// # Errors
/// Returns an error if the URL is invalid or not http(s).
pub fn parse_endpoint(endpoint: &str) -> Result<Url, RegistrationError> {
    let url = Url::parse(endpoint.trim())
        .map_err(|err| RegistrationError::Config(format!("Invalid registration URL: {err}")))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        scheme => Err(RegistrationError::Config(format!(
            "Registration URL must be http(s) with a host, got scheme: {scheme}"
        ))),
    }
}

fn map_request_error(err: reqwest::Error) -> RegistrationError {
    if err.is_timeout() {
        RegistrationError::Timeout(format!("Registration request timed out: {err}"))
    } else if err.is_builder() || err.is_body() {
        RegistrationError::Serialization(format!("Failed to build request: {err}"))
    } else {
        RegistrationError::Network(format!("Unable to reach the registration service: {err}"))
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
