// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Cardcraft.
//!
//! This crate provides the error type, the [`CompletionProvider`] trait that
//! provider adapters implement, and the request/response value types passed
//! between the message generator and its provider.

pub mod error;
pub mod occasion;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CardcraftError;
pub use occasion::{is_known_occasion, OCCASIONS};
pub use traits::CompletionProvider;
pub use types::{
    CompletionChoice, CompletionRequest, CompletionResponse, GeneratedMessage, GenerationRequest,
    MessageSource,
};
