// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI provider adapter for Cardcraft.
//!
//! This crate implements [`CompletionProvider`] for the OpenAI Chat
//! Completions API.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use cardcraft_config::CardcraftConfig;
use cardcraft_core::{
    CardcraftError, CompletionChoice, CompletionProvider, CompletionRequest, CompletionResponse,
};
use tracing::info;

use crate::client::OpenAiClient;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Environment variable consulted when `openai.api_key` is not configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI provider implementing [`CompletionProvider`].
///
/// Built once at startup and shared behind an `Arc`.
/// API key resolution order: config -> `OPENAI_API_KEY` env var -> error.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider from the given configuration.
    ///
    /// Fails with [`CardcraftError::Config`] when no API key is available;
    /// callers treat that as fatal.
    pub fn new(config: &CardcraftConfig) -> Result<Self, CardcraftError> {
        let api_key = resolve_api_key(
            config.openai.api_key.as_deref(),
            std::env::var(API_KEY_ENV).ok(),
        )?;

        let client = OpenAiClient::new(
            &api_key,
            config.openai.model.clone(),
            &config.openai.base_url,
            Duration::from_secs(config.openai.timeout_secs),
        )?;

        info!(
            model = %config.openai.model,
            base_url = %config.openai.base_url,
            "OpenAI provider initialized"
        );

        Ok(Self { client })
    }

    /// Creates a provider around an existing client.
    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }

    fn to_chat_request(&self, request: CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.client.model().to_string(),
            messages: vec![ChatMessage::user(request.prompt)],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CardcraftError> {
        let chat_request = self.to_chat_request(request);
        let response = self.client.chat_completion(&chat_request).await?;
        Ok(to_completion_response(response))
    }
}

/// Flattens the API response to the choice texts, in the order returned.
fn to_completion_response(response: ChatCompletionResponse) -> CompletionResponse {
    CompletionResponse {
        choices: response
            .choices
            .into_iter()
            .map(|choice| CompletionChoice {
                content: choice.message.and_then(|m| m.content),
            })
            .collect(),
    }
}

/// Resolves the API key from config, then the environment value.
///
/// Blank values count as absent.
pub fn resolve_api_key(
    config_key: Option<&str>,
    env_key: Option<String>,
) -> Result<String, CardcraftError> {
    if let Some(key) = config_key
        && !key.trim().is_empty()
    {
        return Ok(key.to_string());
    }

    env_key.filter(|key| !key.trim().is_empty()).ok_or_else(|| {
        CardcraftError::Config(format!(
            "OpenAI API key not found. Set openai.api_key in config or the {API_KEY_ENV} environment variable."
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Choice, ResponseMessage};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn choice(index: u32, content: Option<&str>) -> Choice {
        Choice {
            index,
            message: Some(ResponseMessage {
                role: Some("assistant".into()),
                content: content.map(str::to_string),
            }),
            finish_reason: Some("stop".into()),
        }
    }

    #[test]
    fn resolve_api_key_prefers_config() {
        let key = resolve_api_key(Some("sk-config"), Some("sk-env".into())).unwrap();
        assert_eq!(key, "sk-config");
    }

    #[test]
    fn resolve_api_key_blank_config_falls_back_to_env() {
        let key = resolve_api_key(Some("  "), Some("sk-env".into())).unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn resolve_api_key_missing_is_config_error() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, CardcraftError::Config(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"), "got: {err}");

        let err = resolve_api_key(None, Some(String::new())).unwrap_err();
        assert!(matches!(err, CardcraftError::Config(_)));
    }

    #[test]
    fn new_with_configured_key_succeeds() {
        let mut config = CardcraftConfig::default();
        config.openai.api_key = Some("sk-test".into());
        let provider = OpenAiProvider::new(&config).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn response_conversion_keeps_null_content() {
        let response = ChatCompletionResponse {
            id: Some("x".into()),
            model: Some("gpt-4".into()),
            choices: vec![choice(0, None), choice(1, Some("second"))],
        };
        let converted = to_completion_response(response);
        assert_eq!(converted.choices.len(), 2);
        assert_eq!(converted.choices[0].content, None);
        // Only the first choice counts, even when a later one has text.
        assert_eq!(converted.first_content(), None);
    }

    #[tokio::test]
    async fn complete_round_trip_through_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 100,
                "messages": [{"role": "user", "content": "Write something"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Happy day!"}}]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(
            "sk-test",
            "gpt-4o-mini".into(),
            &server.uri(),
            Duration::from_secs(5),
        )
        .unwrap();
        let provider = OpenAiProvider::with_client(client);

        let response = provider
            .complete(CompletionRequest {
                prompt: "Write something".into(),
                temperature: 0.7,
                max_tokens: 100,
            })
            .await
            .unwrap();
        assert_eq!(response.first_content(), Some("Happy day!"));
    }
}
