//! Generic request/response machinery shared by every resource facade.
//!
//! One [`Client`] serves all resource kinds. Facades pick the method, path,
//! body and expected statuses; this module serializes, sends, races the
//! exchange against the caller's [`CancellationToken`], checks the status and
//! decodes the body.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::ClientError;
use crate::http::check_status;
use crate::trackables::TrackablesApi;

/// Body argument for requests that carry none.
pub const NO_BODY: Option<&()> = None;

const DEFAULT_USER_AGENT: &str = concat!("omlox-client/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one omlox hub.
///
/// Cheap to clone; clones share the underlying connection pool, so a single
/// client can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl Client {
    /// Create a client for the hub at `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL, or [`ClientError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::builder(base_url).build()
    }

    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Operations on `/trackables`.
    #[must_use]
    pub const fn trackables(&self) -> TrackablesApi<'_> {
        TrackablesApi::new(self)
    }

    /// Send one request and return the raw response body.
    ///
    /// `path` is appended to the base URL as is. The body, when present, is
    /// sent as `application/json`, replacing any configured `Content-Type`. A token that is already cancelled fails
    /// before anything is sent.
    ///
    /// # Errors
    ///
    /// [`ClientError::Cancelled`], [`ClientError::Encode`],
    /// [`ClientError::Transport`], or a status error when the response status
    /// is not in `expected`.
    pub async fn send<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<Vec<u8>, ClientError>
    where
        B: Serialize + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let url = format!("{}{path}", self.base_url);
        let mut headers = self.headers.clone();
        let payload = match body {
            Some(body) => {
                let payload = serde_json::to_vec(body).map_err(ClientError::Encode)?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(payload)
            }
            None => None,
        };
        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        tracing::debug!(%method, %url, "sending hub request");
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, ClientError>((status, bytes.to_vec()))
        };

        let (status, bytes) = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(ClientError::Cancelled),
            result = exchange => result?,
        };
        tracing::debug!(%method, %url, status = status.as_u16(), "hub responded");

        check_status(status, &bytes, expected)?;
        Ok(bytes)
    }

    /// Send one request and decode the response body with `decode`.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus [`ClientError::Decode`]
    /// when `decode` rejects the body.
    pub async fn request_with<B, T, F>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
        decode: F,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        F: FnOnce(&[u8]) -> Result<T, serde_json::Error>,
    {
        let bytes = self.send(cancel, method, path, body, expected).await?;
        decode(&bytes).map_err(ClientError::Decode)
    }

    /// Send one request and decode the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`request_with`](Self::request_with).
    pub async fn request_json<B, T>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_with(cancel, method, path, body, expected, |bytes| {
            serde_json::from_slice::<T>(bytes)
        })
        .await
    }

    /// Send one request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn request_empty<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(cancel, method, path, body, expected)
            .await
            .map(drop)
    }
}

/// Decode a JSON array, treating a `null` body as the empty list.
pub(crate) fn decode_list<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_slice::<Option<Vec<T>>>(bytes).map(Option::unwrap_or_default)
}

// ── Builder ────────────────────────────────────────────────────────

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    user_agent: String,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            headers: Vec::new(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Send an extra header with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Per-request transport timeout. Expiry surfaces as
    /// [`ClientError::Transport`].
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured `reqwest::Client`. Timeout and user agent set on
    /// this builder are then ignored; headers and token still apply.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`], [`ClientError::InvalidHeader`]
    /// or [`ClientError::Transport`].
    pub fn build(self) -> Result<Client, ClientError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let headers = build_headers(self.token.as_deref(), &self.headers)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            http,
            base_url,
            headers,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn build_headers(
    token: Option<&str>,
    extra: &[(String, String)],
) -> Result<HeaderMap, ClientError> {
    let invalid = |name: &str, reason: String| ClientError::InvalidHeader {
        name: name.to_string(),
        reason,
    };

    let mut headers = HeaderMap::new();
    for (name, value) in extra {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(name, e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(name, e.to_string()))?;
        headers.insert(header_name, header_value);
    }
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| invalid(AUTHORIZATION.as_str(), e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
