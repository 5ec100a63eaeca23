//! String primitives shared by all generators.
//!
//! Lengths are measured in `char`s, never bytes, so multi-byte input never
//! splits a code point.

/// Marker appended to truncated strings.
pub const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_len` characters.
///
/// Text that fits is returned unchanged. Otherwise the first
/// `max_len - 3` characters are kept and `"..."` is appended, so the result
/// is exactly `max_len` characters long. Caps shorter than the marker get a
/// clipped marker.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len < ELLIPSIS.len() {
        return ELLIPSIS.chars().take(max_len).collect();
    }

    let keep = max_len - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Convert a hyphenated slug into a human-readable title.
///
/// Each `-`-separated segment gets an uppercase first character and a
/// lowercased remainder; segments are joined with single spaces.
///
/// ```ignore
/// assert_eq!(slug_to_title("sell-land-fast-in-ohio"), "Sell Land Fast In Ohio");
/// ```
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Strip leading and trailing `/` from a URL path segment.
#[inline]
pub fn normalize_slug(slug: &str) -> &str {
    slug.trim_matches('/')
}

/// Replace hyphens with spaces (`land-for-sale` -> `land for sale`).
#[inline]
pub fn slug_to_phrase(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Format a number the way an en-US locale would for display.
///
/// Thousands are grouped with commas; fractional parts are rounded to at
/// most three digits with trailing zeros dropped (`1234.5` -> `1,234.5`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
