//! Scripted completion client for tests.
//!
//! Queues canned JSON and text completions; an exhausted queue or the
//! failing mode returns an error so tests can exercise every degraded path.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{CompletionClient, LlmError};

/// A completion client that replays scripted responses.
#[derive(Default)]
pub struct MockCompletion {
    json_queue: Mutex<VecDeque<serde_json::Value>>,
    text_queue: Mutex<VecDeque<String>>,
    fail_all: bool,
    json_calls: AtomicUsize,
    text_calls: AtomicUsize,
}

impl MockCompletion {
    /// A mock with empty queues. Calls fail with [`LlmError::EmptyCompletion`]
    /// until responses are pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock where every call fails, for exercising degraded paths.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Queue a JSON completion.
    pub fn push_json(self, value: serde_json::Value) -> Self {
        self.json_queue
            .lock()
            .expect("mock lock poisoned")
            .push_back(value);
        self
    }

    /// Queue a text completion.
    pub fn push_text(self, text: impl Into<String>) -> Self {
        self.text_queue
            .lock()
            .expect("mock lock poisoned")
            .push_back(text.into());
        self
    }

    /// Number of `complete_json` calls made.
    pub fn json_calls(&self) -> usize {
        self.json_calls.load(Ordering::SeqCst)
    }

    /// Number of `complete_text` calls made.
    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete_json(
        &self,
        _system: &str,
        _user: &str,
    ) -> Result<serde_json::Value, LlmError> {
        self.json_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(LlmError::Request("mock configured to fail".to_string()));
        }
        self.json_queue
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .ok_or(LlmError::EmptyCompletion)
    }

    async fn complete_text(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(LlmError::Request("mock configured to fail".to_string()));
        }
        self.text_queue
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .ok_or(LlmError::EmptyCompletion)
    }
}
