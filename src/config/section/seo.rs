//! `[seo]` section configuration (length caps, OG tags).

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::text::ELLIPSIS;
use crate::seo::{DEFAULT_DESCRIPTION_MAX, DEFAULT_TITLE_MAX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSectionConfig {
    /// Maximum `<title>` length in characters.
    pub title_max: usize,

    /// Maximum meta description length in characters.
    pub description_max: usize,

    /// Emit Open Graph and Twitter tags in rendered heads.
    pub auto_og: bool,

    /// Value for `twitter:card`.
    pub twitter_card: String,
}

impl Default for SeoSectionConfig {
    fn default() -> Self {
        Self {
            title_max: DEFAULT_TITLE_MAX,
            description_max: DEFAULT_DESCRIPTION_MAX,
            auto_og: true,
            twitter_card: "summary_large_image".into(),
        }
    }
}

impl SeoSectionConfig {
    pub const TITLE_MAX: FieldPath = FieldPath::new("seo.title_max");
    pub const DESCRIPTION_MAX: FieldPath = FieldPath::new("seo.description_max");
    pub const TWITTER_CARD: FieldPath = FieldPath::new("seo.twitter_card");

    const TWITTER_CARDS: [&'static str; 4] = ["summary", "summary_large_image", "app", "player"];

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::TITLE_MAX, self.title_max),
            (Self::DESCRIPTION_MAX, self.description_max),
        ] {
            if value <= ELLIPSIS.len() {
                diag.report(field, format!("{value} leaves no room for text before the ellipsis"))
                    .hint(format!("use a value greater than {}", ELLIPSIS.len()));
            }
        }

        if !Self::TWITTER_CARDS.contains(&self.twitter_card.as_str()) {
            diag.report(
                Self::TWITTER_CARD,
                format!("unknown card type '{}'", self.twitter_card),
            )
            .hint(format!("use one of: {}", Self::TWITTER_CARDS.join(", ")));
        }
    }
}
