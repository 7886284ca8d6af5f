use std::ops::Deref;

use serde::Serialize;

use crate::chat::ChatMessage;
use crate::errors::{Error, Result};

/// Ordered, non-empty list of messages submitted in one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation(Vec<ChatMessage>);

impl Conversation {
    /// Wraps decoded messages, rejecting an empty list before anything is rendered
    pub fn new(messages: Vec<ChatMessage>) -> Result<Self> {
        if messages.is_empty() {
            return Err(Error::EmptyConversation);
        }
        Ok(Conversation(messages))
    }
}

impl Deref for Conversation {
    type Target = [ChatMessage];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_conversation_rejected() {
        let err = Conversation::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyConversation));
    }

    #[test]
    fn test_conversation_keeps_order() {
        let conversation = Conversation::new(vec![
            ChatMessage::new("system", "be brief"),
            ChatMessage::new("user", "hi"),
        ])
        .unwrap();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[0].role, "system");
        assert_eq!(conversation[1].content, "hi");
    }
}
