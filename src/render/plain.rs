use std::borrow::Cow;

use super::style::Style;
use super::wrap::{normalize, wrap};
use crate::chat::{ChatMessage, Conversation};
use crate::constants::{BANNER_GLYPH, BANNER_WIDTH, TRANSCRIPT_TITLE};

/// A piece of transcript text with an optional semantic style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: Cow<'static, str>,
    pub style: Option<Style>,
}

impl Span {
    pub fn plain(text: impl Into<Cow<'static, str>>) -> Self {
        Span {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Span {
            text: text.into(),
            style: Some(style),
        }
    }
}

fn banner() -> String {
    BANNER_GLYPH.to_string().repeat(BANNER_WIDTH)
}

/// Lays out a conversation as a decorated transcript
///
/// # Arguments
/// * `conversation` - Messages to lay out, numbered from 1
/// * `width` - Column width message content is wrapped to
pub fn transcript(conversation: &Conversation, width: usize) -> Vec<Span> {
    let banner = banner();
    let mut spans = vec![Span::plain(format!(
        "\n{banner}\n{TRANSCRIPT_TITLE}\n{banner}\n"
    ))];

    for (index, message) in conversation.iter().enumerate() {
        push_message(&mut spans, message, index + 1, width);
    }

    spans.push(Span::plain(format!("{banner}\n\n")));
    spans
}

fn push_message(spans: &mut Vec<Span>, message: &ChatMessage, number: usize, width: usize) {
    spans.push(Span::plain(format!("\n{} ", message.role().symbol())));
    spans.push(Span::styled(message.role.to_uppercase(), Style::Role));
    spans.push(Span::plain(" ("));
    spans.push(Span::styled(number.to_string(), Style::Index));
    spans.push(Span::plain("):\n"));
    spans.push(Span::styled(
        wrap(&normalize(&message.content), width),
        Style::Body,
    ));
    spans.push(Span::plain("\n"));
}
