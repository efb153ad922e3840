use serde_json::Value;

use crate::error::ContentError;

/// Length in UTF-16 code units, which is how browsers count the
/// characters in the submit form.
pub fn content_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Trims the same characters a browser's `String.prototype.trim` does,
/// which includes the byte-order mark.
pub fn trim_content(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Replaces the five markup-significant characters with entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Validates a raw `content` field and returns the string to persist.
///
/// The length limit applies to the trimmed text before escaping, so the
/// stored value may be longer than `max_chars` once entities are expanded.
pub fn sanitize_content(raw: Option<&Value>, max_chars: usize) -> Result<String, ContentError> {
    let text = match raw {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(ContentError::Missing),
    };

    let trimmed = trim_content(text);
    if trimmed.is_empty() {
        return Err(ContentError::Empty);
    }

    let len = content_len(trimmed);
    if len > max_chars {
        return Err(ContentError::TooLong { max: max_chars, len });
    }

    Ok(escape_html(trimmed))
}
