use serde::Deserialize;

use crate::chat::message::null_as_default;
use crate::chat::ChatMessage;
use crate::errors::{Error, Result};

/// Request body shape; every other field of a completion request is ignored
#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    messages: Vec<ChatMessage>,
}

/// Decodes a raw request body into its ordered message list
///
/// # Arguments
/// * `body` - Raw request bytes
///
/// # Returns
/// * `Result<Vec<ChatMessage>>` - The messages in submission order, possibly empty
///
/// # Errors
/// Returns `Error::Decode` if the body is not a JSON object of the expected shape.
pub fn decode(body: &[u8]) -> Result<Vec<ChatMessage>> {
    let request: ChatRequest = serde_json::from_slice(body).map_err(Error::Decode)?;
    Ok(request.messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_messages_in_order() {
        let body = br#"{
            "model": "gpt-4o",
            "stream": false,
            "messages": [
                {"role": "system", "content": "You are helpful."},
                {"role": "user", "content": "Hello there, how are you?"}
            ]
        }"#;
        let messages = decode(body).unwrap();
        assert_eq!(
            messages,
            vec![
                ChatMessage::new("system", "You are helpful."),
                ChatMessage::new("user", "Hello there, how are you?"),
            ]
        );
    }

    #[test]
    fn test_decode_missing_fields_default_to_empty() {
        let messages = decode(br#"{"messages":[{}, {"role":"user"}]}"#).unwrap();
        assert_eq!(messages[0], ChatMessage::default());
        assert_eq!(messages[1], ChatMessage::new("user", ""));
    }

    #[test]
    fn test_decode_null_fields_default_to_empty() {
        let body = br#"{"messages":[
            {"role":"user","content":"hi"},
            {"role":"assistant","content":null,"tool_calls":[]},
            {"role":null}
        ]}"#;
        let messages = decode(body).unwrap();
        assert_eq!(
            messages,
            vec![
                ChatMessage::new("user", "hi"),
                ChatMessage::new("assistant", ""),
                ChatMessage::default(),
            ]
        );
    }

    #[test]
    fn test_decode_null_messages_is_empty() {
        let messages = decode(br#"{"messages":null}"#).unwrap();
        assert!(messages.is_empty());
        assert!(matches!(
            crate::chat::Conversation::new(messages),
            Err(Error::EmptyConversation)
        ));
    }

    #[test]
    fn test_decode_empty_list_is_not_a_decode_error() {
        assert!(decode(br#"{"messages":[]}"#).unwrap().is_empty());
        assert!(decode(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed_body() {
        for body in [
            &b"not json"[..],
            br#"{"messages": "hello"}"#,
            br#"{"messages":[{"role": 3, "content": "x"}]}"#,
            br#"[1, 2]"#,
            b"",
        ] {
            assert!(matches!(decode(body), Err(Error::Decode(_))));
        }
    }
}
