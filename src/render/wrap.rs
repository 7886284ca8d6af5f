use unicode_width::UnicodeWidthStr;

/// Trims surrounding whitespace and turns literal `\n` sequences into line breaks
pub fn normalize(content: &str) -> String {
    content.trim().replace("\\n", "\n")
}

/// Word-wraps text to `max_width` columns
///
/// Existing line breaks are kept; each line is filled greedily on its own.
pub fn wrap(text: &str, max_width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy line fill over whitespace-separated words.
/// A word wider than `max_width` gets a line of its own and is never split.
fn wrap_line(text: &str, max_width: usize) -> String {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut current_width = first.width();

    for word in words {
        let word_width = word.width();
        if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }
    lines.push(current);

    lines.join("\n")
}
