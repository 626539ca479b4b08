use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged message in a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A complete generation request: ordered messages plus the fixed sampling
/// parameters. Serializes directly as the chat-completions request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait seam for the external text-generation service.
pub trait ChatModel {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError>;
}

/// Mock generation service for testing — canned reply or forced failure,
/// with the invocation count and received requests recorded.
pub struct MockChatModel {
    reply: String,
    fail: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::replying("")
        }
    }

    /// How many times `complete` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

impl ChatModel for MockChatModel {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());
        if self.fail {
            Err(GenerationError::Connection("http://mock".to_string()))
        } else {
            Ok(self.reply.clone())
        }
    }
}
