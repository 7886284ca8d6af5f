use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::plain::Span;

/// Semantic styles used in plain transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Upper-cased role name
    Role,
    /// 1-based message index
    Index,
    /// Message content block
    Body,
}

impl Style {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Style::Role => text.bold(),
            Style::Index => text.bright_black(),
            Style::Body => text.bright_white(),
        }
    }
}

/// Writes spans, resolving styles to ANSI codes only when `styled` is set
pub fn write_spans<W: Write>(out: &mut W, spans: &[Span], styled: bool) -> io::Result<()> {
    for span in spans {
        match span.style {
            Some(style) if styled => write!(out, "{}", style.paint(&span.text))?,
            _ => out.write_all(span.text.as_bytes())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<Span> {
        vec![
            Span::plain("👤 "),
            Span::styled("USER", Style::Role),
            Span::plain(" ("),
            Span::styled("1", Style::Index),
            Span::plain("):\n"),
            Span::styled("hi", Style::Body),
        ]
    }

    #[test]
    fn test_unstyled_output_has_no_escape_codes() {
        let mut out = Vec::new();
        write_spans(&mut out, &spans(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "👤 USER (1):\nhi");
    }

    #[test]
    fn test_styled_output_wraps_styled_spans() {
        colored::control::set_override(true);
        let mut out = Vec::new();
        write_spans(&mut out, &spans(), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "👤 \x1b[1mUSER\x1b[0m (\x1b[90m1\x1b[0m):\n\x1b[97mhi\x1b[0m"
        );
    }
}
