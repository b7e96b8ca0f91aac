// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for text-generation services.

use async_trait::async_trait;

use crate::error::CardcraftError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A text-generation service invoked with a prompt.
///
/// Implementations report throttling as [`CardcraftError::RateLimited`] and
/// every other failure as [`CardcraftError::Provider`]. They must not retry
/// internally; retry policy belongs to the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a single completion request.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CardcraftError>;
}
