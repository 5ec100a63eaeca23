//! Keyword list derivation.

use super::text::slug_to_phrase;

/// Maximum related keywords derived from a slug.
pub const MAX_RELATED: usize = 4;

/// Maximum keywords emitted on the generic slug path.
pub const MAX_GENERIC_KEYWORDS: usize = 8;

/// Maximum keywords emitted on the property path.
pub const MAX_PROPERTY_KEYWORDS: usize = 4;

/// Generic terms appended to every procedurally derived keyword list.
pub const GENERIC_TERMS: [&str; 2] = ["land for sale", "property listings"];

/// Separator used when joining keyword lists.
pub const SEPARATOR: &str = ", ";

/// Derive related keyword phrases from a slug.
///
/// Always starts with the full phrase. Multi-segment slugs add the phrase of
/// the first two segments; slugs with three or more segments also add the
/// last two. At most [`MAX_RELATED`] entries are returned.
pub fn related_keywords(slug: &str) -> Vec<String> {
    let segments: Vec<&str> = slug.split('-').collect();
    let mut keywords = vec![slug_to_phrase(slug)];

    if segments.len() > 1 {
        keywords.push(segments[..segments.len().min(2)].join(" "));
    }
    if segments.len() > 2 {
        keywords.push(segments[segments.len() - 2..].join(" "));
    }

    keywords.truncate(MAX_RELATED);
    keywords
}

/// Build the comma-joined keyword string for the generic slug path.
pub fn generic_keywords(focus_keyphrase: &str, slug: &str) -> String {
    let list: Vec<String> = std::iter::once(focus_keyphrase.to_string())
        .chain(related_keywords(slug))
        .chain(GENERIC_TERMS.iter().map(|term| term.to_string()))
        .take(MAX_GENERIC_KEYWORDS)
        .collect();
    list.join(SEPARATOR)
}

/// Build the comma-joined keyword string for a property listing.
pub fn property_keywords(focus_keyphrase: &str, city: Option<&str>, state: Option<&str>) -> String {
    let mut list = vec![focus_keyphrase.to_string()];
    if let Some(city) = city {
        list.push(format!("land {city}"));
    }
    if let Some(state) = state {
        list.push(format!("land {state}"));
    }
    if let (Some(city), Some(state)) = (city, state) {
        list.push(format!("{city} {state} land"));
    }
    list.truncate(MAX_PROPERTY_KEYWORDS);
    list.join(SEPARATOR)
}

/// Build the fixed four-phrase keyword string for a local business page.
pub fn local_business_keywords(focus_keyphrase: &str, city: &str, state: &str) -> String {
    [
        focus_keyphrase.to_string(),
        format!("land {city}"),
        format!("{city} {state} real estate"),
        format!("buy land {state}"),
    ]
    .join(SEPARATOR)
}
