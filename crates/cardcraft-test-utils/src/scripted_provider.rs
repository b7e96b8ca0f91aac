// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted completion provider for deterministic testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cardcraft_core::{
    CardcraftError, CompletionChoice, CompletionProvider, CompletionRequest, CompletionResponse,
};

/// One scripted provider outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// A single choice carrying this text.
    Text(String),
    /// A single choice with no content.
    Empty,
    /// A response with zero choices.
    NoChoices,
    /// The provider reports HTTP 429.
    RateLimited,
    /// Any other provider failure, with this message.
    Fail(String),
}

impl ScriptedReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    fn into_result(self) -> Result<CompletionResponse, CardcraftError> {
        match self {
            Self::Text(text) => Ok(CompletionResponse::single(text)),
            Self::Empty => Ok(CompletionResponse {
                choices: vec![CompletionChoice { content: None }],
            }),
            Self::NoChoices => Ok(CompletionResponse::default()),
            Self::RateLimited => Err(CardcraftError::RateLimited {
                message: "scripted 429".to_string(),
            }),
            Self::Fail(message) => Err(CardcraftError::provider(message)),
        }
    }
}

/// A provider that pops replies from a FIFO queue.
///
/// When the queue is empty the `repeat` reply is returned, so
/// `ScriptedProvider::always(ScriptedReply::RateLimited)` fails forever.
/// Clones share the queue and the call log.
#[derive(Clone)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    repeat: ScriptedReply,
    calls: Arc<AtomicU32>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    latency: Duration,
}

impl ScriptedProvider {
    /// Replays `replies` in order, then answers "mock response".
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            repeat: ScriptedReply::text("mock response"),
            calls: Arc::new(AtomicU32::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            latency: Duration::ZERO,
        }
    }

    /// Answers every call with `reply`.
    pub fn always(reply: ScriptedReply) -> Self {
        Self::new(Vec::new()).repeating(reply)
    }

    /// Sets the reply used once the queue is drained.
    pub fn repeating(mut self, reply: ScriptedReply) -> Self {
        self.repeat = reply;
        self
    }

    /// Simulated round-trip time per call (honours tokio's paused clock).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, in call order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    async fn next_reply(&self) -> ScriptedReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| self.repeat.clone())
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CardcraftError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().await.push(request);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let reply = self.next_reply().await;
        tracing::trace!(call, ?reply, "scripted provider reply");
        reply.into_result()
    }
}
