// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message generation with rate-limit backoff and template fallback.
//!
//! Each call runs a bounded attempt loop: the provider result is classified
//! into an [`AttemptOutcome`], and [`next_step`] decides between returning,
//! sleeping and retrying, or falling back to the template table.

use std::sync::Arc;
use std::time::Duration;

use cardcraft_core::{
    CardcraftError, CompletionProvider, CompletionRequest, CompletionResponse, GeneratedMessage,
    GenerationRequest, MessageSource,
};
use strum::Display;
use tracing::{debug, info, warn};

use crate::fallback::fallback_message;
use crate::prompt::build_prompt;

/// Provider calls made per generation, including the first.
pub const MAX_ATTEMPTS: u32 = 3;

/// Wait before the attempt following `attempt` (1-indexed): `2^attempt` seconds.
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt)
}

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 100,
        }
    }
}

/// Classification of one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// First choice carried non-empty text.
    Success(String),
    /// Provider signalled HTTP 429.
    RateLimited(String),
    /// Anything else, including an empty first choice.
    Failed(String),
}

impl AttemptOutcome {
    pub fn classify(result: Result<CompletionResponse, CardcraftError>) -> Self {
        match result {
            Ok(response) => match response.first_content() {
                Some(text) => Self::Success(text.to_string()),
                None => Self::Failed("no message content in first choice".to_string()),
            },
            Err(err) if err.is_rate_limited() => Self::RateLimited(err.to_string()),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Why the fallback template was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FallbackReason {
    /// Every attempt was rate limited.
    RateLimitExhausted,
    /// A non-rate-limit failure ended the loop early.
    ProviderFailure,
}

/// What to do after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Return(String),
    Retry(Duration),
    Fallback(FallbackReason),
}

/// Decides the transition out of `attempt` given its outcome.
pub fn next_step(attempt: u32, outcome: AttemptOutcome) -> Step {
    match outcome {
        AttemptOutcome::Success(text) => Step::Return(text),
        AttemptOutcome::RateLimited(_) if attempt < MAX_ATTEMPTS => {
            Step::Retry(backoff_delay(attempt))
        }
        AttemptOutcome::RateLimited(_) => Step::Fallback(FallbackReason::RateLimitExhausted),
        AttemptOutcome::Failed(_) => Step::Fallback(FallbackReason::ProviderFailure),
    }
}

/// Produces greeting messages, falling back to fixed templates on failure.
///
/// Holds only a shared provider handle and copyable settings, so clones are
/// cheap and concurrent calls do not interact.
#[derive(Clone)]
pub struct MessageGenerator {
    provider: Arc<dyn CompletionProvider>,
    settings: GenerationSettings,
}

impl MessageGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> GenerationSettings {
        self.settings
    }

    /// Returns a message for `request`. Never fails; provider errors yield the fallback text.
    pub async fn generate(&self, request: &GenerationRequest) -> String {
        self.generate_detailed(request).await.text
    }

    /// Like [`generate`](Self::generate), but also reports where the text came from.
    pub async fn generate_detailed(&self, request: &GenerationRequest) -> GeneratedMessage {
        info!(
            occasion = %request.occasion,
            recipient = %request.recipient_name,
            sender = %request.sender_name,
            has_context = request.additional_context().is_some(),
            provider = self.provider.name(),
            "starting message generation"
        );

        let completion = CompletionRequest {
            prompt: build_prompt(request),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let mut attempt = 1;
        let reason = loop {
            debug!(attempt, max_attempts = MAX_ATTEMPTS, "requesting completion");

            let outcome =
                AttemptOutcome::classify(self.provider.complete(completion.clone()).await);

            match &outcome {
                AttemptOutcome::Success(_) => {}
                AttemptOutcome::RateLimited(detail) => {
                    warn!(attempt, detail = %detail, "completion rate limited");
                }
                AttemptOutcome::Failed(detail) => {
                    warn!(attempt, detail = %detail, "completion failed");
                }
            }

            match next_step(attempt, outcome) {
                Step::Return(text) => {
                    info!(attempt, "message generated");
                    return GeneratedMessage {
                        text,
                        source: MessageSource::Generated,
                        attempts: attempt,
                    };
                }
                Step::Retry(delay) => {
                    info!(
                        attempt,
                        wait_secs = delay.as_secs(),
                        "rate limited, waiting before retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Step::Fallback(reason) => break reason,
            }
        };

        info!(attempts = attempt, reason = %reason, "using fallback message");
        GeneratedMessage {
            text: fallback_message(
                &request.occasion,
                &request.recipient_name,
                &request.sender_name,
            ),
            source: MessageSource::Fallback,
            attempts: attempt,
        }
    }
}
