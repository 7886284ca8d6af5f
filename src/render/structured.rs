use std::io::Write;

use crate::chat::Conversation;
use crate::errors::{Error, Result};

/// Writes the message list as one line of compact JSON
pub fn write_json<W: Write>(out: &mut W, conversation: &Conversation) -> Result<()> {
    serde_json::to_writer(&mut *out, conversation).map_err(Error::from_encoding)?;
    out.write_all(b"\n")?;
    Ok(())
}
