use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{ASSISTANT_SYMBOL, SYSTEM_SYMBOL, UNKNOWN_SYMBOL, USER_SYMBOL};

/// Represents a chat message with a role and content
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatMessage {
    /// Role of the message sender (e.g. "system", "user", "assistant")
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    /// Content/text of the message, `null` for tool-call-only assistant turns
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl ChatMessage {
    /// Creates a new chat message
    ///
    /// # Arguments
    /// * `role` - Role of the message sender
    /// * `content` - Content/text of the message
    #[cfg(test)]
    pub fn new(role: &str, content: &str) -> Self {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        Role::from(self.role.as_str())
    }
}

/// Reads an explicit JSON `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sender roles with a dedicated transcript symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    Unknown,
}

impl Role {
    pub fn symbol(self) -> &'static str {
        match self {
            Role::System => SYSTEM_SYMBOL,
            Role::User => USER_SYMBOL,
            Role::Assistant => ASSISTANT_SYMBOL,
            Role::Unknown => UNKNOWN_SYMBOL,
        }
    }
}

impl From<&str> for Role {
    /// Exact, case-sensitive match on the wire value
    fn from(value: &str) -> Self {
        match value {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Unknown,
        }
    }
}
