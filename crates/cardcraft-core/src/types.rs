// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value types shared between the generator and provider adapters.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::CardcraftError;

/// Form input for a single message generation.
///
/// Field names deserialize from camelCase to match the card form payload
/// (`recipientName`, `additionalContext`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub occasion: String,
    pub recipient_name: String,
    pub sender_name: String,
    #[serde(default)]
    pub additional_context: Option<String>,
}

impl GenerationRequest {
    /// Builds a request, rejecting blank occasion, recipient or sender.
    ///
    /// An empty `additional_context` is normalized to `None`; any other text,
    /// whitespace included, is kept verbatim.
    pub fn new(
        occasion: impl Into<String>,
        recipient_name: impl Into<String>,
        sender_name: impl Into<String>,
        additional_context: Option<String>,
    ) -> Result<Self, CardcraftError> {
        let request = Self {
            occasion: occasion.into(),
            recipient_name: recipient_name.into(),
            sender_name: sender_name.into(),
            additional_context: additional_context.filter(|c| !c.is_empty()),
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks the required fields, naming every one that is blank.
    pub fn validate(&self) -> Result<(), CardcraftError> {
        let missing: Vec<&str> = [
            ("occasion", &self.occasion),
            ("recipientName", &self.recipient_name),
            ("senderName", &self.sender_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CardcraftError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Additional context, if present and non-empty.
    pub fn additional_context(&self) -> Option<&str> {
        self.additional_context.as_deref().filter(|c| !c.is_empty())
    }
}

/// A single-turn completion request sent to a [`CompletionProvider`](crate::CompletionProvider).
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Candidate completions returned by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

/// One candidate completion. `content` is `None` when the provider returned no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChoice {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Convenience constructor for a response with a single text choice.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice {
                content: Some(text.into()),
            }],
        }
    }

    /// Text of the first choice, ignoring empty strings.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}

/// Where a returned message came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageSource {
    /// Text produced by the completion provider.
    Generated,
    /// Text rendered from the fallback template table.
    Fallback,
}

/// A generated message together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMessage {
    /// The message body handed to the caller.
    pub text: String,
    pub source: MessageSource,
    /// Number of provider calls made.
    pub attempts: u32,
}
