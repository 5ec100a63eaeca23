//! HTML escaping helpers for head rendering.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script_json()` - make serialized JSON safe inside `<script>`

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

/// Escape serialized JSON for embedding in a `<script>` element.
///
/// JSON strings may legally contain `</script>`; `</` becomes `<\/`, which
/// JSON parsers read back as the same characters.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains("</") {
        return Cow::Borrowed(json);
    }
    Cow::Owned(json.replace("</", "<\\/"))
}
