//! Open Graph and Twitter Card site-level defaults.
//!
//! Page-specific values (og:title, og:description, og:url) come from
//! [`SeoMetadata`](super::SeoMetadata); this holds what is shared by every page.

use crate::config::SiteConfig;

/// Default Open Graph tags from site config.
#[derive(Debug, Clone, PartialEq)]
pub struct OgDefaults<'a> {
    pub enable: bool,
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_card: &'a str,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site config.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            enable: config.seo.auto_og,
            og_type: "website",
            site_name: &config.site.name,
            locale: &config.site.locale,
            twitter_card: &config.seo.twitter_card,
        }
    }
}
