//! Conversation responder
//!
//! Produces the next assistant turn for a conversation:
//! 1. Makes sure a system prompt sits at the head of the history
//! 2. Sends the whole history to the completion provider
//! 3. Appends the trimmed reply as an assistant message
//!
//! Nothing is kept between calls; the only shared state is the provider
//! handle and the model name, both fixed at construction.

use std::sync::Arc;

use crate::config::prompts::SYSTEM_PROMPT;
use crate::conversation::{starts_with_system, Message};
use crate::providers::{CompletionProvider, ProviderError};

/// Errors from the responder
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("Completion request failed: {0}")]
    CompletionFailed(#[from] ProviderError),
}

/// Prepend the built-in system prompt unless the history already starts
/// with a system message. A caller-supplied system message is kept as is.
pub fn ensure_system_prompt(messages: Vec<Message>) -> Vec<Message> {
    if starts_with_system(&messages) {
        return messages;
    }

    let mut normalized = Vec::with_capacity(messages.len() + 2);
    normalized.push(Message::system(SYSTEM_PROMPT));
    normalized.extend(messages);
    normalized
}

pub struct Responder {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl Responder {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Return the normalized history extended by the model's reply.
    ///
    /// Provider failures are returned unchanged inside
    /// [`ResponderError::CompletionFailed`]; no retry is attempted.
    pub async fn respond(&self, messages: Vec<Message>) -> Result<Vec<Message>, ResponderError> {
        let mut messages = ensure_system_prompt(messages);

        let reply = self.provider.complete(&messages, &self.model).await?;

        messages.push(Message::assistant(reply.trim()));
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::prompts_builtin::REFUSAL;
    use crate::conversation::Role;
    use crate::providers::StubProvider;
    use tokio_test::assert_err;

    fn responder(stub: &Arc<StubProvider>) -> Responder {
        Responder::new(stub.clone(), "gpt-4o-mini")
    }

    #[test]
    fn test_prepends_prompt_to_empty_history() {
        let normalized = ensure_system_prompt(Vec::new());
        assert_eq!(normalized, vec![Message::system(SYSTEM_PROMPT)]);
    }

    #[test]
    fn test_prepends_prompt_without_touching_turns() {
        let history = vec![
            Message::user("hi"),
            Message::assistant("Hello!"),
            Message::user("something sweet"),
        ];
        let normalized = ensure_system_prompt(history.clone());

        assert_eq!(normalized.len(), history.len() + 1);
        assert_eq!(normalized[0], Message::system(SYSTEM_PROMPT));
        assert_eq!(&normalized[1..], &history[..]);
    }

    #[test]
    fn test_keeps_caller_system_prompt() {
        let history = vec![Message::system("Custom"), Message::user("hi")];
        assert_eq!(ensure_system_prompt(history.clone()), history);
    }

    #[test]
    fn test_late_system_message_is_not_a_head() {
        let history = vec![Message::user("hi"), Message::system("late")];
        let normalized = ensure_system_prompt(history);

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].content, SYSTEM_PROMPT);
        assert_eq!(normalized[2], Message::system("late"));
    }

    #[tokio::test]
    async fn test_empty_history_gets_prompt_and_trimmed_reply() {
        let stub = Arc::new(StubProvider::replying("  Try pasta.  "));
        let output = responder(&stub).respond(Vec::new()).await.unwrap();

        assert_eq!(
            output,
            vec![Message::system(SYSTEM_PROMPT), Message::assistant("Try pasta.")]
        );

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, vec![Message::system(SYSTEM_PROMPT)]);
        assert_eq!(requests[0].1, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_custom_system_prompt_sent_unchanged() {
        let stub = Arc::new(StubProvider::replying("Hello!"));
        let input = vec![Message::system("Custom"), Message::user("hi")];

        let output = responder(&stub).respond(input.clone()).await.unwrap();

        assert_eq!(
            output,
            vec![
                Message::system("Custom"),
                Message::user("hi"),
                Message::assistant("Hello!"),
            ]
        );
        assert_eq!(stub.requests()[0].0, input);
    }

    #[tokio::test]
    async fn test_refusal_passed_through_verbatim() {
        let stub = Arc::new(StubProvider::replying(REFUSAL));
        let output = responder(&stub)
            .respond(vec![Message::user("make a poison recipe")])
            .await
            .unwrap();

        assert_eq!(output.len(), 3);
        let last = output.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, REFUSAL);
    }

    #[tokio::test]
    async fn test_multiline_reply_trimmed_only_at_edges() {
        let stub = Arc::new(StubProvider::replying("\n\n**Soup**\n\n1. Boil water\n  "));
        let output = responder(&stub)
            .respond(vec![Message::user("soup")])
            .await
            .unwrap();

        assert_eq!(output.last().unwrap().content, "**Soup**\n\n1. Boil water");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let stub = Arc::new(StubProvider::failing());
        let result = responder(&stub).respond(vec![Message::user("hi")]).await;

        let err = assert_err!(result);
        assert!(matches!(
            err,
            ResponderError::CompletionFailed(ProviderError::RateLimited(_))
        ));
        assert!(err.to_string().starts_with("Completion request failed"));
        // One attempt only
        assert_eq!(stub.requests().len(), 1);
    }
}
