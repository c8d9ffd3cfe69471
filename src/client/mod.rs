//! HTTP client for the remote execution and judging service.
//!
//! The service answers every endpoint with a JSON body carrying a `success`
//! flag, including most failures, so bodies are decoded regardless of the
//! status code. Requests are sent once; nothing here retries.

pub mod types;
mod exercise;
mod run;

pub use types::*;

use crate::config::ServiceConfig;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request timeout - the service took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the service")]
    Connect,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse service response as JSON: {0}")]
    Decode(String),
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Connect
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct PlaygroundClient {
    http: Client,
    base_url: Url,
}

impl PlaygroundClient {
    pub fn new(config: &ServiceConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;
        let mut base_url = Url::parse(&config.base_url)?;
        // Endpoints are joined relative to the base, which needs a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => {
                debug!(status = status.as_u16(), length = body.len(), "Service responded");
                Ok(parsed)
            }
            Err(e) if status.is_success() => Err(ClientError::Decode(e.to_string())),
            Err(_) => {
                warn!(status = status.as_u16(), "Service returned a non-JSON error");
                Err(ClientError::Http {
                    status: status.as_u16(),
                    message: match status.as_u16() {
                        404 => "Not found".to_string(),
                        429 => "Rate limit exceeded - too many requests".to_string(),
                        500..=599 => format!("Server error: {}", body.trim()),
                        _ => body.trim().to_string(),
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests;
