//! Client construction and the authenticated request pipeline.

use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Error;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.timeular.com/api/v4";

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SIGN_IN_PATH: &str = "/developer/sign-in";

/// Authenticated Timeular API client.
///
/// Construction performs the sign-in exchange, so a `Client` you can hold
/// always carries a valid token. Endpoint methods take `&self` and issue one
/// HTTP request each; responses are passed through as decoded
/// [`serde_json::Value`]s.
///
/// # Thread Safety
///
/// Methods can be awaited from multiple tasks through a shared reference.
/// The token is only rewritten by the opt-in 401 re-authentication path
/// (see [`ClientBuilder::reauthenticate_on_unauthorized`]).
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    token: RwLock<String>,
    reauthenticate: bool,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    api_key: &'a str,
    api_secret: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    token: String,
}

impl Client {
    /// Starts building a client with non-default options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Signs in against the production API with default options.
    ///
    /// Issues exactly one `POST /developer/sign-in` with the credentials and
    /// stores the returned bearer token for the lifetime of the client.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty or whitespace-only, if
    /// the HTTP client fails to build, if the API refuses the credentials,
    /// or if the sign-in response lacks a usable token.
    pub async fn sign_in(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::builder().sign_in(api_key, api_secret).await
    }

    /// Issues a body-less authenticated request.
    pub(crate) async fn call(&self, method: Method, path: &str) -> Result<Value, Error> {
        self.call_inner::<()>(method, path, None).await
    }

    /// Issues an authenticated request with a JSON body.
    pub(crate) async fn call_with<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<Value, Error> {
        self.call_inner(method, path, Some(body)).await
    }

    async fn call_inner<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Value, Error> {
        let (status, text) = self.send(method.clone(), path, body).await?;

        if status == StatusCode::UNAUTHORIZED && self.reauthenticate {
            debug!(path, "token rejected, re-authenticating");
            let token =
                request_token(&self.http, &self.base_url, &self.api_key, &self.api_secret).await?;
            self.store_token(token);
            let (status, text) = self.send(method, path, body).await?;
            return decode(status, text);
        }

        decode(status, text)
    }

    async fn send<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<(StatusCode, String), Error> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, path, "sending request");

        let mut request = self.http.request(method, &url).bearer_auth(self.current_token());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%status, path, "received response");

        let text = response.text().await?;
        Ok((status, text))
    }

    // A poisoned lock only means a panicked writer; the stored token is
    // still the last value written and remains usable.
    fn current_token(&self) -> String {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store_token(&self, token: String) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

/// Exchanges credentials for a bearer token.
async fn request_token(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    api_secret: &str,
) -> Result<String, Error> {
    let url = format!("{base_url}{SIGN_IN_PATH}");
    debug!("exchanging credentials for a token");

    let response = http
        .post(&url)
        .json(&SignInRequest { api_key, api_secret })
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Authentication { status, body });
    }

    let payload: SignInResponse =
        serde_json::from_str(&body).map_err(|err| Error::Decode(err.to_string()))?;
    if payload.token.is_empty() {
        return Err(Error::Decode("sign-in response contained an empty token".to_string()));
    }
    Ok(payload.token)
}

fn decode(status: StatusCode, body: String) -> Result<Value, Error> {
    if !status.is_success() {
        return Err(Error::Api { status, body });
    }
    serde_json::from_str(&body).map_err(|err| Error::Decode(err.to_string()))
}

/// Builder for [`Client`].
///
/// The defaults target the production API with a 30 second timeout and no
/// re-authentication, mirroring the upstream contract; every option exists
/// for tests, proxies, or long-lived deployments.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    reauthenticate: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            reauthenticate: false,
        }
    }
}

impl ClientBuilder {
    /// Overrides the API root, e.g. to point at a mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout enforced by the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// When enabled, a 401 response to an endpoint call triggers one
    /// re-sign-in with the stored credentials and one retry of the original
    /// request. Off by default: the upstream token is otherwise never
    /// refreshed, so long-lived clients fail once it expires.
    #[must_use]
    pub const fn reauthenticate_on_unauthorized(mut self, enabled: bool) -> Self {
        self.reauthenticate = enabled;
        self
    }

    /// Performs the sign-in exchange and returns the authenticated client.
    ///
    /// # Errors
    ///
    /// See [`Client::sign_in`]. Construction is atomic: no client value
    /// exists unless sign-in succeeded.
    pub async fn sign_in(
        self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Client, Error> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(Error::InvalidCredentials { reason: "API key cannot be empty" });
        }
        if api_secret.trim().is_empty() {
            return Err(Error::InvalidCredentials { reason: "API secret cannot be empty" });
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::ClientBuild)?;

        let token = request_token(&http, &self.base_url, &api_key, &api_secret).await?;
        info!("signed in to the Timeular API");

        Ok(Client {
            http,
            base_url: self.base_url,
            api_key,
            api_secret,
            token: RwLock::new(token),
            reauthenticate: self.reauthenticate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_client() -> Client {
        Client {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "key-material".to_string(),
            api_secret: "secret-material".to_string(),
            token: RwLock::new("token-material".to_string()),
            reauthenticate: false,
        }
    }

    #[tokio::test]
    async fn sign_in_rejects_empty_api_key() {
        let result = Client::sign_in("", "secret").await;
        assert!(matches!(result, Err(Error::InvalidCredentials { .. })));
    }

    #[tokio::test]
    async fn sign_in_rejects_whitespace_credentials() {
        let result = Client::sign_in("   ", "secret").await;
        assert!(matches!(result, Err(Error::InvalidCredentials { .. })));

        let result = Client::sign_in("key", " \t").await;
        assert!(matches!(result, Err(Error::InvalidCredentials { .. })));
    }

    #[test]
    fn debug_redacts_secrets() {
        let client = stub_client();
        let debug = format!("{client:?}");
        assert!(!debug.contains("key-material"));
        assert!(!debug.contains("secret-material"));
        assert!(!debug.contains("token-material"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn builder_defaults_target_production() {
        let builder = Client::builder();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
        assert!(!builder.reauthenticate);
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let builder = Client::builder().base_url("http://localhost:8080/");
        assert_eq!(builder.base_url, "http://localhost:8080");
    }

    #[test]
    fn sign_in_body_uses_wire_field_names() {
        let body = serde_json::to_value(SignInRequest {
            api_key: "k",
            api_secret: "s",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"apiKey": "k", "apiSecret": "s"}));
    }
}
