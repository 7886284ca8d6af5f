//! Chat payload model and decoding
//!
//! Requests carry an OpenAI-style body; only the `messages` list is read.

mod conversation;
mod decoder;
mod message;

pub use conversation::Conversation;
pub use decoder::decode;
pub use message::{ChatMessage, Role};
