// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for external collaborators.
//!
//! Traits use `#[async_trait]` so implementations can be held as
//! `Arc<dyn CompletionProvider>`.

pub mod provider;

pub use provider::CompletionProvider;
