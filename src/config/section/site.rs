//! `[site]` section configuration.
//!
//! Site identity used in titles, canonical links and Open Graph tags.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::{BASE_URL, SITE_NAME};

const URL_HINT: &str = "use format like https://acreagesale.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Display name appended to page titles.
    pub name: String,

    /// Base URL for canonical links (e.g., "https://acreagesale.com").
    pub url: String,

    /// Locale for `og:locale` (e.g., "en_US").
    pub locale: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            name: SITE_NAME.into(),
            url: BASE_URL.into(),
            locale: "en_US".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LOCALE: FieldPath = FieldPath::new("site.locale");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must not be blank
    /// - `url` must be an http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.report(Self::NAME, "site name is empty")
                .hint("set a display name, e.g.: \"AcreageSale\"");
        }

        if self.locale.trim().is_empty() {
            diag.report(Self::LOCALE, "locale is empty").hint("use a value like en_US");
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    let scheme = parsed.scheme();
                    diag.report(
                        Self::URL,
                        format!("scheme '{scheme}' not supported, must be http or https"),
                    )
                    .hint(URL_HINT);
                }
                if parsed.host_str().is_none() {
                    diag.report(Self::URL, "URL must have a valid host").hint(URL_HINT);
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.report(Self::URL, "URL must not contain a query or fragment");
                }
            }
            Err(e) => {
                diag.report(Self::URL, format!("invalid URL: {e}")).hint(URL_HINT);
            }
        }
    }
}
