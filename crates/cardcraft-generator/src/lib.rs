// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Greeting message generation for Cardcraft.
//!
//! [`MessageGenerator`] wraps a [`CompletionProvider`](cardcraft_core::CompletionProvider)
//! with a fixed policy: at most [`MAX_ATTEMPTS`] calls, `2^n` second waits
//! after rate-limited attempts, no retry on other failures, and a
//! deterministic template message whenever generation does not succeed.
//!
//! ```no_run
//! # async fn demo(provider: std::sync::Arc<dyn cardcraft_core::CompletionProvider>) {
//! use cardcraft_core::GenerationRequest;
//! use cardcraft_generator::MessageGenerator;
//!
//! let generator = MessageGenerator::new(provider);
//! let request = GenerationRequest::new("Birthday", "Ana", "Lee", None).unwrap();
//! let message = generator.generate(&request).await;
//! # }
//! ```

pub mod fallback;
pub mod generator;
pub mod prompt;

pub use fallback::{fallback_message, FallbackTemplate, DEFAULT_TEMPLATE, FALLBACK_TEMPLATES};
pub use generator::{
    backoff_delay, next_step, AttemptOutcome, FallbackReason, GenerationSettings,
    MessageGenerator, Step, MAX_ATTEMPTS,
};
pub use prompt::build_prompt;
