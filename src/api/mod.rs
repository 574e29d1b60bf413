//! Remote API Client
//!
//! HTTP bindings to the todo backend, organized by domain. On wasm32 the
//! reqwest client rides the browser fetch API; the deadline is enforced
//! here by racing each request against a timer.

mod chat;
mod todos;

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Fixed per-request deadline
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

/// Fallback base URL when none is configured at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Failures of a single request/response round trip
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}

/// Thin HTTP client bound to a fixed base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL from the `TODO_API_URL` compile-time env var, or the local default
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Race a request future against the fixed deadline
    async fn deadline<T>(fut: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        let timer = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(fut);
        pin_mut!(timer);
        match select(fut, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        response.json().await.map_err(ApiError::Decode)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        Self::deadline(async {
            let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
            Self::decode(response).await
        })
        .await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        Self::deadline(async {
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(ApiError::Network)?;
            Self::decode(response).await
        })
        .await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        Self::deadline(async {
            let response = self
                .http
                .put(&url)
                .json(body)
                .send()
                .await
                .map_err(ApiError::Network)?;
            Self::decode(response).await
        })
        .await
    }

    /// DELETE with an empty response body; only the status is checked
    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        Self::deadline(async {
            let response = self.http.delete(&url).send().await.map_err(ApiError::Network)?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status));
            }
            Ok(())
        })
        .await
    }
}
