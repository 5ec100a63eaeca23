//! `<head>` fragment rendering.
//!
//! Turns a [`SeoMetadata`] into the tags a page injects into its document
//! head: title, description/keywords meta, canonical link, Open Graph and
//! Twitter tags, and a JSON-LD script when structured data is present.

use std::fmt::Write;

use super::SeoMetadata;
use super::og::OgDefaults;
use crate::utils::html::{escape, escape_attr, escape_script_json};

/// Render the head fragment, one tag per line.
pub fn render_head(meta: &SeoMetadata, og: &OgDefaults<'_>) -> String {
    HeadWriter::default().render(meta, og)
}

#[derive(Default)]
struct HeadWriter {
    out: String,
}

impl HeadWriter {
    fn render(mut self, meta: &SeoMetadata, og: &OgDefaults<'_>) -> String {
        let _ = writeln!(self.out, "<title>{}</title>", escape(&meta.title));
        self.meta_name("description", &meta.description);
        if !meta.keywords.is_empty() {
            self.meta_name("keywords", &meta.keywords);
        }
        let _ = writeln!(
            self.out,
            "<link rel=\"canonical\" href=\"{}\">",
            escape_attr(&meta.canonical)
        );

        if og.enable {
            self.meta_property("og:title", &meta.og_title);
            self.meta_property("og:description", &meta.og_description);
            self.meta_property("og:url", &meta.canonical);
            self.meta_property("og:type", og.og_type);
            self.meta_property("og:site_name", og.site_name);
            self.meta_property("og:locale", og.locale);
            self.meta_name("twitter:card", og.twitter_card);
            self.meta_name("twitter:title", &meta.og_title);
            self.meta_name("twitter:description", &meta.og_description);
        }

        if let Some(data) = &meta.structured_data
            && let Ok(json) = serde_json::to_string(data)
        {
            let _ = writeln!(
                self.out,
                "<script type=\"application/ld+json\">{}</script>",
                escape_script_json(&json)
            );
        }

        self.out
    }

    fn meta_name(&mut self, name: &str, content: &str) {
        let _ = writeln!(
            self.out,
            "<meta name=\"{name}\" content=\"{}\">",
            escape_attr(content)
        );
    }

    fn meta_property(&mut self, property: &str, content: &str) {
        let _ = writeln!(
            self.out,
            "<meta property=\"{property}\" content=\"{}\">",
            escape_attr(content)
        );
    }
}
