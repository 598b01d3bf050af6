//! Shared HTTP plumbing for the REST gateways.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use arca_shared::config::ApiConfig;
use arca_shared::{AppError, AppResult};

/// Thin wrapper around a [`reqwest::Client`] bound to one backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Builds a client from API configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Issues a GET and decodes the JSON response body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        decode(check(response).await?).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response body.
    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(check(response).await?).await
    }

    /// Issues a PUT with a JSON body, discarding any response body.
    pub async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<()> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }

    /// Issues a DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let response = self.http.delete(&url).send().await.map_err(transport)?;
        check(response).await.map(|_| ())
    }
}

/// Joins a base URL and an API path without doubling slashes.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn transport(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Transport("Request timed out".to_string())
    } else {
        AppError::Transport(err.to_string())
    }
}

/// Rejects non-success responses, draining the body for an error message.
async fn check(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json()
        .await
        .map_err(|e| AppError::Internal(format!("Malformed response body: {e}")))
}

/// Maps a non-success status and raw body to an [`AppError`].
///
/// The backend wraps errors as `{"message": "..."}`; anything else falls
/// back to the raw body, or the canonical status reason when the body is
/// empty.
fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    if status == StatusCode::NOT_FOUND {
        AppError::NotFound(message)
    } else {
        AppError::Server {
            status: status.as_u16(),
            message,
        }
    }
}
