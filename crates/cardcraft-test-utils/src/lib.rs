// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Cardcraft.
//!
//! Provides [`ScriptedProvider`], a [`CompletionProvider`](cardcraft_core::CompletionProvider)
//! that replays a fixed sequence of outcomes and records every call.

pub mod scripted_provider;

pub use scripted_provider::{ScriptedProvider, ScriptedReply};
