use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, error};
use uuid::Uuid;

use crate::api::AppState;
use crate::chat::{self, Conversation};
use crate::config::RenderConfig;
use crate::errors::Result;
use crate::render;

/// Prints the conversation carried by a chat completion request
///
/// The endpoint never answers with content: failures are logged locally and
/// the caller always gets an empty `200 OK`.
///
/// # Arguments
/// * `state` - Shared application state holding the render settings
/// * `body` - Raw request body
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_completions(State(state): State<AppState>, body: Bytes) -> StatusCode {
    debug!("Received {} bytes", body.len());
    if let Err(e) = print_conversation(&body, &state.render) {
        error!("{}", e);
    }
    StatusCode::OK
}

/// Decodes a request body and renders it
///
/// An empty message list is rejected before the sink is opened, so no file
/// is created and nothing is printed for it.
pub fn print_conversation(body: &[u8], config: &RenderConfig) -> Result<()> {
    let messages = chat::decode(body)?;
    let conversation = Conversation::new(messages)?;
    render::render(&conversation, config)
}
