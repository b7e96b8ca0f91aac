// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for greeting messages.

use cardcraft_core::GenerationRequest;

/// Placeholder written into the prompt when no context was given.
pub const NO_CONTEXT: &str = "None";

/// Builds the single-turn prompt sent to the completion provider.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "Write a short, heartfelt {} message to {} from {}. Additional context: {}.",
        request.occasion,
        request.recipient_name,
        request.sender_name,
        request.additional_context().unwrap_or(NO_CONTEXT),
    )
}
