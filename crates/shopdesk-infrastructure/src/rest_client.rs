//! Thin `reqwest` wrapper for the admin REST API.
//!
//! One call is one HTTP request: no retries and no caching. Responses are
//! unwrapped from the `{ success, data }` envelope, and every failure is
//! mapped onto [`ShopdeskError`] with the server's message passed through
//! unmodified.

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shopdesk_core::config::ApiConfig;
use shopdesk_core::envelope::{ApiEnvelope, PageMeta};
use shopdesk_core::error::{Result, ShopdeskError};
use std::time::Duration;

/// HTTP client bound to one API base URL.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl RestClient {
    /// Builds a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ShopdeskError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    /// Uses an existing `reqwest::Client` (shared connection pool).
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
            timeout: config.timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/products/42`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Sends the request and turns any non-2xx status into an HTTP error.
    async fn send(&self, method: &Method, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!("[RestClient] {} {}", method, path);

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(status, response).await;
        tracing::warn!(
            "[RestClient] {} {} failed with {}: {}",
            method,
            path,
            status.as_u16(),
            message
        );
        Err(ShopdeskError::http(status.as_u16(), message))
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<(T, Option<PageMeta>)> {
        let response = self.send(&method, path, request).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(transport_error)?;
        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)?;
        envelope.into_page(status)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path);
        self.envelope(Method::GET, path, request)
            .await
            .map(|(data, _)| data)
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get_page(path, query).await.map(|(data, _)| data)
    }

    /// GET that also returns the envelope's pagination block.
    pub async fn get_page<T, Q>(&self, path: &str, query: &Q) -> Result<(T, Option<PageMeta>)>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path).query(query);
        self.envelope(Method::GET, path, request).await
    }

    /// GET where a 404 means "does not exist yet" rather than an error.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path).await {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.is_not_found() => {
                tracing::debug!("[RestClient] {} not found, treating as absent", path);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path).json(body);
        self.envelope(Method::POST, path, request)
            .await
            .map(|(data, _)| data)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.envelope(Method::PUT, path, request)
            .await
            .map(|(data, _)| data)
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path).json(body);
        self.envelope(Method::PATCH, path, request)
            .await
            .map(|(data, _)| data)
    }

    /// Body-less call returning data, e.g. `PATCH /languages/:code/toggle`.
    pub async fn call<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let request = self.request(method.clone(), path);
        self.envelope(method, path, request)
            .await
            .map(|(data, _)| data)
    }

    /// DELETE that accepts `204 No Content` or any success envelope.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path);
        let response = self.send(&Method::DELETE, path, request).await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        // Non-envelope bodies are tolerated; only an explicit failure counts.
        if let Ok(envelope) = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes)
            && !envelope.success
        {
            let message = envelope
                .server_message()
                .unwrap_or("Request failed")
                .to_string();
            return Err(ShopdeskError::http(status.as_u16(), message));
        }
        Ok(())
    }

    /// Sends a multipart form (product create/update with an image).
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let request = self.request(method.clone(), path).multipart(form);
        self.envelope(method, path, request)
            .await
            .map(|(data, _)| data)
    }
}

/// Maps a `reqwest` failure that produced no usable response.
pub(crate) fn transport_error(err: reqwest::Error) -> ShopdeskError {
    if err.is_decode() {
        ShopdeskError::serialization("JSON", err.to_string())
    } else if err.is_timeout() {
        ShopdeskError::transport(format!("Request timed out: {}", err))
    } else {
        ShopdeskError::transport(err.to_string())
    }
}

/// Best message for a failed response: the envelope's error or message,
/// else the raw body, else the status reason.
async fn error_message(status: StatusCode, response: Response) -> String {
    let body = response.text().await.unwrap_or_default();

    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
        && let Some(message) = envelope.server_message()
    {
        return message.to_string();
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
