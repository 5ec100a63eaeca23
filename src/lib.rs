//! SEO head metadata for AcreageSale landing pages.
//!
//! Derives titles, descriptions, keywords, canonical links, Open Graph
//! fields and schema.org JSON-LD from URL slugs, optionally enriched with
//! property listing or local business data.

pub mod config;
pub mod logger;
pub mod seo;
pub mod utils;

pub use seo::{
    LocationAttributes, PropertyAttributes, SeoGenerator, SeoMetadata, generate_for_local_business,
    generate_for_property, generate_from_slug,
};
