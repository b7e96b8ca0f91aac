// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cardcraft generate`: one message for one form submission.

use std::sync::Arc;

use cardcraft_config::CardcraftConfig;
use cardcraft_core::{CardcraftError, GenerationRequest};
use cardcraft_generator::{GenerationSettings, MessageGenerator};
use cardcraft_openai::OpenAiProvider;
use clap::Args;
use tracing::info;

/// Form fields for a generation request.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Occasion, e.g. "Birthday" or "Get Well".
    #[arg(long)]
    pub occasion: String,

    /// Recipient's name.
    #[arg(long)]
    pub recipient: String,

    /// Sender's name.
    #[arg(long)]
    pub sender: String,

    /// Optional extra details for the prompt.
    #[arg(long)]
    pub context: Option<String>,

    /// Print `{"message": ...}` instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> Result<GenerationRequest, CardcraftError> {
        GenerationRequest::new(
            self.occasion.as_str(),
            self.recipient.as_str(),
            self.sender.as_str(),
            self.context.clone(),
        )
    }
}

/// Builds the process-wide generator around the OpenAI provider.
///
/// Fails only when the provider cannot be constructed, most commonly a
/// missing API key.
pub fn build_generator(config: &CardcraftConfig) -> Result<MessageGenerator, CardcraftError> {
    let provider = OpenAiProvider::new(config)?;
    Ok(
        MessageGenerator::new(Arc::new(provider)).with_settings(GenerationSettings {
            temperature: config.openai.temperature,
            max_tokens: config.openai.max_tokens,
        }),
    )
}

/// Validates the form, generates a message, and formats it for stdout.
pub async fn run_generate(
    generator: &MessageGenerator,
    args: &GenerateArgs,
) -> Result<String, CardcraftError> {
    let request = args.to_request()?;
    let result = generator.generate_detailed(&request).await;

    info!(
        source = %result.source,
        attempts = result.attempts,
        "generation finished"
    );

    Ok(render_output(&result.text, args.json))
}

/// Formats the message as plain text or as the `{"message": ...}` JSON body.
pub fn render_output(text: &str, json: bool) -> String {
    if json {
        serde_json::json!({ "message": text }).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcraft_test_utils::{ScriptedProvider, ScriptedReply};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(occasion: &str, json: bool) -> GenerateArgs {
        GenerateArgs {
            occasion: occasion.into(),
            recipient: "Ana".into(),
            sender: "Lee".into(),
            context: None,
            json,
        }
    }

    fn config_for(base_url: &str) -> CardcraftConfig {
        let mut config = CardcraftConfig::default();
        config.openai.api_key = Some("sk-test".into());
        config.openai.base_url = base_url.to_string();
        config
    }

    #[test]
    fn render_output_json_matches_api_shape() {
        let out = render_output("Hi \"Ana\"", true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["message"], "Hi \"Ana\"");
        assert_eq!(render_output("plain", false), "plain");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_generation() {
        let provider = ScriptedProvider::default();
        let generator = MessageGenerator::new(Arc::new(provider.clone()));

        let err = run_generate(&generator, &args("  ", false)).await.unwrap_err();
        assert!(matches!(err, CardcraftError::Validation(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn run_generate_uses_provider_text() {
        let provider = ScriptedProvider::new(vec![ScriptedReply::text("Happy birthday!")]);
        let generator = MessageGenerator::new(Arc::new(provider));

        let out = run_generate(&generator, &args("Birthday", false)).await.unwrap();
        assert_eq!(out, "Happy birthday!");
    }

    #[tokio::test]
    async fn build_generator_talks_to_configured_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Cheers, Ana!"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let generator = build_generator(&config_for(&server.uri())).unwrap();
        let out = run_generate(&generator, &args("Wedding", true)).await.unwrap();
        assert_eq!(out, r#"{"message":"Cheers, Ana!"}"#);
    }

    #[tokio::test]
    async fn server_error_yields_fallback_through_real_client() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let generator = build_generator(&config_for(&server.uri())).unwrap();
        let out = run_generate(&generator, &args("Anniversary", false)).await.unwrap();
        assert_eq!(
            out,
            "Dear Ana, happy anniversary! May your love continue to grow stronger with each passing year. From, Lee"
        );
    }

    #[test]
    fn build_generator_carries_config_settings() {
        let mut config = config_for("http://localhost:9");
        config.openai.temperature = 0.4;
        config.openai.max_tokens = 80;

        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.settings().temperature, 0.4);
        assert_eq!(generator.settings().max_tokens, 80);
    }
}
