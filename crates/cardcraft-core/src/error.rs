// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Cardcraft.

use thiserror::Error;

/// The primary error type used across Cardcraft crates.
///
/// Only [`CardcraftError::Config`] is expected to escape to a caller of the
/// binary: provider failures are absorbed by the message generator.
#[derive(Debug, Error)]
pub enum CardcraftError {
    /// Configuration errors (missing credential, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A generation request failed input validation.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The completion provider signalled throttling (HTTP 429).
    #[error("provider rate limited: {message}")]
    RateLimited { message: String },

    /// Any other provider failure: transport, non-2xx status, malformed body, empty content.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CardcraftError {
    /// Shorthand for a [`CardcraftError::Provider`] without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if the provider asked the caller to slow down.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
