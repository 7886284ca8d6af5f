//! Transcript rendering
//!
//! A conversation is written either as a decorated plain-text transcript or as
//! a JSON message list, to stdout or to a file created for the purpose.

mod plain;
mod sink;
mod structured;
mod style;
mod wrap;

use std::io::Write;

use tracing::{debug, info};

use crate::chat::Conversation;
use crate::config::{OutputFormat, RenderConfig};
use crate::errors::Result;

use plain::transcript;
use sink::Sink;

/// Renders a conversation to the configured target
///
/// Styling is only applied when enabled and the sink is stdout.
///
/// # Errors
/// * `Error::FileExists` - the target file is already present
/// * `Error::FileCreate` - the target file cannot be created
/// * `Error::Write` - the sink failed mid-write; partial output is left as is
/// * `Error::Serialization` - the message list could not be encoded
pub fn render(conversation: &Conversation, config: &RenderConfig) -> Result<()> {
    let mut sink = Sink::open(&config.target)?;
    let styled = config.color && !sink.is_file();

    write_conversation(&mut sink, conversation, config, styled)?;
    sink.flush()?;

    match config.format {
        OutputFormat::Json => info!("Messages written to {}", sink),
        OutputFormat::Plain => debug!("Transcript of {} messages written to {}", conversation.len(), sink),
    }
    Ok(())
}

/// Writes a conversation in the configured format to any writer
pub fn write_conversation<W: Write>(
    out: &mut W,
    conversation: &Conversation,
    config: &RenderConfig,
    styled: bool,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => structured::write_json(out, conversation),
        OutputFormat::Plain => {
            let spans = transcript(conversation, config.width);
            style::write_spans(out, &spans, styled)?;
            Ok(())
        }
    }
}
