//! Test-only provider returning a canned reply

use std::sync::Mutex;

use async_trait::async_trait;

use crate::conversation::Message;

use super::{CompletionProvider, ProviderError};

/// Records every request and answers with a fixed reply, or fails.
pub struct StubProvider {
    reply: Option<String>,
    requests: Mutex<Vec<(Vec<Message>, String)>>,
}

impl StubProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call fails as a rate-limited upstream would.
    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Conversations and model names received so far, oldest first.
    pub fn requests(&self) -> Vec<(Vec<Message>, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), model.to_string()));

        self.reply
            .clone()
            .ok_or_else(|| ProviderError::RateLimited("slow down".to_string()))
    }
}
