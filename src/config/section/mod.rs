//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "AcreageSale"
//! url = "https://acreagesale.com"
//! locale = "en_US"
//!
//! [seo]
//! title_max = 60
//! description_max = 160
//! auto_og = true
//! twitter_card = "summary_large_image"
//! ```

mod seo;
mod site;

pub use seo::SeoSectionConfig;
pub use site::SiteSectionConfig;
