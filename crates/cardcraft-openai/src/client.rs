// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions API.
//!
//! Provides [`OpenAiClient`], which handles request construction,
//! bearer authentication, and mapping HTTP failures onto [`CardcraftError`].
//! It never retries: a 429 is surfaced as [`CardcraftError::RateLimited`]
//! so the message generator can apply its own backoff.

use std::time::Duration;

use cardcraft_core::CardcraftError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Default base URL for the OpenAI API.
pub const API_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client for OpenAI API communication.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key, sent as a bearer token
    /// * `model` - Model identifier used for every request
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    /// * `timeout` - Transport timeout for a single request
    pub fn new(
        api_key: &str,
        model: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, CardcraftError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| CardcraftError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CardcraftError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    /// Returns the model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the full chat completions URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat completion request.
    ///
    /// HTTP 429 maps to [`CardcraftError::RateLimited`]; every other failure
    /// (transport, timeout, non-2xx, unparsable body) maps to
    /// [`CardcraftError::Provider`].
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CardcraftError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| CardcraftError::Provider {
                message: if e.is_timeout() {
                    format!("request timed out: {e}")
                } else {
                    format!("HTTP request failed: {e}")
                },
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %request.model, "chat completion response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| CardcraftError::Provider {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            return serde_json::from_str(&body).map_err(|e| CardcraftError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = describe_error(status, &body);

        if status == StatusCode::TOO_MANY_REQUESTS {
            Err(CardcraftError::RateLimited { message })
        } else {
            Err(CardcraftError::provider(message))
        }
    }
}

/// Formats a non-2xx response, preferring the API's own error message.
fn describe_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_err) => format!(
            "OpenAI API error ({}, {}): {}",
            status,
            api_err.error.type_.as_deref().unwrap_or("unknown"),
            api_err.error.message
        ),
        Err(_) => format!("API returned {status}: {body}"),
    }
}
