//! Conversation types
//!
//! A conversation is a plain `Vec<Message>` in chronological order. It is
//! replayed to the model in full on every turn, so messages are only ever
//! appended, never edited.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl Message {
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

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// True when the first message carries the system role.
pub fn starts_with_system(messages: &[Message]) -> bool {
    matches!(messages.first(), Some(m) if m.role == Role::System)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let msg = Message::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));

        let parsed: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"Hello!"}"#).unwrap();
        assert_eq!(parsed, Message::assistant("Hello!"));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let parsed = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_starts_with_system() {
        assert!(!starts_with_system(&[]));
        assert!(!starts_with_system(&[Message::user("hi")]));
        assert!(starts_with_system(&[Message::system("x"), Message::user("hi")]));
        // Only the head counts
        assert!(!starts_with_system(&[Message::user("hi"), Message::system("x")]));
    }
}
