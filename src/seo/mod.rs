//! SEO head metadata generation.
//!
//! Maps a URL slug (plus optional listing or business data) to the title,
//! description, keywords, canonical link, Open Graph fields and JSON-LD
//! structured data injected into a page's `<head>`.
//!
//! Every operation is pure and infallible: any input string yields a
//! well-formed [`SeoMetadata`].
//!
//! # Example
//!
//! ```ignore
//! let meta = generate_from_slug("land-for-sale-in-iowa");
//! assert_eq!(meta.title, "Land For Sale In Iowa | AcreageSale");
//! ```

pub mod head;
pub mod keywords;
pub mod og;
pub mod schema;
pub mod special;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::debug;
use schema::{
    BreadcrumbList, GeoCoordinates, LocalBusiness, Offer, Place, PostalAddress, QuantitativeValue,
    RealEstateListing, SCHEMA_CONTEXT, StructuredData, WebPage, WebSite,
};
use text::{normalize_slug, slug_to_phrase, slug_to_title, truncate};

/// Site display name used in title suffixes.
pub const SITE_NAME: &str = "AcreageSale";

/// Base URL for canonical links (no trailing slash).
pub const BASE_URL: &str = "https://acreagesale.com";

pub const DEFAULT_TITLE_MAX: usize = 60;
pub const DEFAULT_DESCRIPTION_MAX: usize = 160;

// ============================================================================
// Types
// ============================================================================

/// Metadata bundle for one page head.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub focus_keyphrase: String,
    pub title: String,
    pub description: String,
    /// Comma-joined keyword phrases.
    pub keywords: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub structured_data: Option<StructuredData>,
}

impl SeoMetadata {
    /// Keyword phrases as a list.
    pub fn keyword_list(&self) -> Vec<&str> {
        if self.keywords.is_empty() {
            return Vec::new();
        }
        self.keywords.split(keywords::SEPARATOR).collect()
    }
}

/// Optional real-estate listing data for property pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyAttributes {
    pub city: Option<String>,
    pub state: Option<String>,
    pub acres: Option<f64>,
    pub price: Option<f64>,
    #[serde(alias = "postalCode", alias = "zipCode")]
    pub zip: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(alias = "lat")]
    pub latitude: Option<f64>,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: Option<f64>,
}

impl PropertyAttributes {
    fn city(&self) -> Option<&str> {
        non_empty(self.city.as_deref())
    }

    fn state(&self) -> Option<&str> {
        non_empty(self.state.as_deref())
    }

    fn zip(&self) -> Option<&str> {
        non_empty(self.zip.as_deref())
    }

    fn location(&self) -> Option<(&str, &str)> {
        self.city().zip(self.state())
    }

    /// Acreage worth headlining: zero reads as "Land".
    fn listed_acres(&self) -> Option<f64> {
        finite(self.acres).filter(|acres| *acres != 0.0)
    }
}

/// Data for a local business (office or market) page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationAttributes {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// ============================================================================
// Generator
// ============================================================================

/// Derives [`SeoMetadata`] for a site.
///
/// `Default` uses the built-in AcreageSale identity and the 60/160 caps.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoGenerator {
    site_name: String,
    base_url: String,
    title_max: usize,
    description_max: usize,
}

impl Default for SeoGenerator {
    fn default() -> Self {
        Self {
            site_name: SITE_NAME.into(),
            base_url: BASE_URL.into(),
            title_max: DEFAULT_TITLE_MAX,
            description_max: DEFAULT_DESCRIPTION_MAX,
        }
    }
}

impl SeoGenerator {
    pub fn new(site_name: impl Into<String>, base_url: &str) -> Self {
        Self {
            site_name: site_name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.site.name.clone(), &config.site.url)
            .with_limits(config.seo.title_max, config.seo.description_max)
    }

    pub fn with_limits(mut self, title_max: usize, description_max: usize) -> Self {
        self.title_max = title_max;
        self.description_max = description_max;
        self
    }

    fn canonical(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    fn title(&self, title_text: &str) -> String {
        truncate(&format!("{title_text} | {}", self.site_name), self.title_max)
    }

    fn description(&self, text: &str) -> String {
        truncate(text, self.description_max)
    }

    /// Derive metadata from a slug alone.
    ///
    /// The empty slug yields the home page bundle; known campaign slugs yield
    /// their hand-authored bundles; anything else is derived procedurally.
    pub fn generate_from_slug(&self, slug: &str) -> SeoMetadata {
        let slug = normalize_slug(slug);
        if slug.is_empty() {
            return special::home();
        }
        if let Some(meta) = special::lookup(slug) {
            debug!("seo"; "hand-authored metadata for /{}", slug);
            return meta;
        }

        let focus_keyphrase = slug_to_phrase(slug);
        let title_text = slug_to_title(slug);
        let title = self.title(&title_text);
        let description = self.description(&format!(
            "Discover {title_text} with {site}. Explore {focus_keyphrase} opportunities, \
             compare acreage and prices, and find the right land for your goals today.",
            site = self.site_name,
        ));
        let keywords = keywords::generic_keywords(&focus_keyphrase, slug);
        let canonical = self.canonical(slug);

        let page = WebPage::new(
            title.clone(),
            description.clone(),
            canonical.clone(),
            WebSite::new(self.site_name.clone(), self.base_url.clone()),
        )
        .with_breadcrumb(BreadcrumbList::from_trail([
            ("Home", self.base_url.as_str()),
            (title_text.as_str(), canonical.as_str()),
        ]));

        SeoMetadata {
            focus_keyphrase,
            og_title: title.clone(),
            og_description: description.clone(),
            title,
            description,
            keywords,
            canonical,
            structured_data: Some(StructuredData::WebPage(page)),
        }
    }

    /// Derive metadata for a property listing page.
    ///
    /// Without attributes this is [`generate_from_slug`](Self::generate_from_slug).
    pub fn generate_for_property(
        &self,
        slug: &str,
        attributes: Option<&PropertyAttributes>,
    ) -> SeoMetadata {
        let slug = normalize_slug(slug);
        if slug.is_empty() {
            return special::home();
        }
        let Some(attrs) = attributes else {
            return self.generate_from_slug(slug);
        };

        let focus_keyphrase = slug_to_phrase(slug);
        let title_text = match attrs.location() {
            Some((city, state)) => match attrs.listed_acres() {
                Some(acres) => format!("{acres} Acres in {city}, {state}"),
                None => format!("Land in {city}, {state}"),
            },
            None => slug_to_title(slug),
        };
        let title = self.title(&title_text);
        let description = self.description(&self.property_description(attrs, &title_text));
        let keywords = keywords::property_keywords(&focus_keyphrase, attrs.city(), attrs.state());
        let canonical = self.canonical(slug);

        let mut listing =
            RealEstateListing::new(title_text.clone(), description.clone(), canonical.clone());
        listing.offers = finite(attrs.price).map(Offer::in_stock_usd);
        listing.floor_size = finite(attrs.acres).map(QuantitativeValue::acres);
        listing.address = PostalAddress::us(attrs.city(), attrs.state(), attrs.zip());
        listing.geo = finite(attrs.latitude)
            .zip(finite(attrs.longitude))
            .map(|(lat, lng)| GeoCoordinates::new(lat, lng));
        listing.image = attrs.images.clone().filter(|images| !images.is_empty());

        SeoMetadata {
            focus_keyphrase,
            og_title: title.clone(),
            og_description: description.clone(),
            title,
            description,
            keywords,
            canonical,
            structured_data: Some(StructuredData::RealEstateListing(listing)),
        }
    }

    /// Tiered description: full listing detail, location only, or generic.
    fn property_description(&self, attrs: &PropertyAttributes, title_text: &str) -> String {
        let site = &self.site_name;
        match (attrs.listed_acres(), finite(attrs.price), attrs.location()) {
            (Some(acres), Some(price), Some((city, state))) => format!(
                "{acres} acres for sale in {city}, {state} - ${price}. View photos, maps and \
                 financing options for this property on {site}.",
                price = text::format_number(price),
            ),
            (_, _, Some((city, state))) => format!(
                "Land for sale in {city}, {state}. Explore available acreage and find your \
                 ideal property with {site}."
            ),
            _ => format!("{title_text} available now on {site}. Explore land for sale today."),
        }
    }

    /// Derive metadata for a local business page.
    ///
    /// The slug is normalized like the other operations before it is joined
    /// onto the base URL.
    pub fn generate_for_local_business(
        &self,
        slug: &str,
        location: &LocationAttributes,
    ) -> SeoMetadata {
        let LocationAttributes {
            name,
            city,
            state,
            description,
        } = location;

        let title = self.title(&format!("{name} - {city}, {state}"));
        let description = match description {
            Some(custom) => self.description(custom),
            None => self.description(&format!(
                "{name} helps buyers and sellers with land for sale in {city}, {state}. \
                 Browse local acreage with {site}.",
                site = self.site_name,
            )),
        };
        let focus_keyphrase = format!("land for sale {city} {state}");
        let keywords = keywords::local_business_keywords(&focus_keyphrase, city, state);
        let canonical = self.canonical(normalize_slug(slug));

        let business = LocalBusiness {
            context: SCHEMA_CONTEXT,
            kind: "LocalBusiness",
            name: name.clone(),
            description: description.clone(),
            url: canonical.clone(),
            address: us_address(city, state),
            area_served: Place {
                kind: "City",
                name: city.clone(),
                address: us_address(city, state),
            },
        };

        SeoMetadata {
            focus_keyphrase,
            og_title: title.clone(),
            og_description: description.clone(),
            title,
            description,
            keywords,
            canonical,
            structured_data: Some(StructuredData::LocalBusiness(business)),
        }
    }
}

fn us_address(city: &str, state: &str) -> PostalAddress {
    PostalAddress {
        kind: "PostalAddress",
        address_locality: Some(city.to_string()),
        address_region: Some(state.to_string()),
        postal_code: None,
        address_country: "US",
    }
}

// ============================================================================
// Convenience functions (built-in site identity)
// ============================================================================

/// [`SeoGenerator::generate_from_slug`] with the default generator.
pub fn generate_from_slug(slug: &str) -> SeoMetadata {
    SeoGenerator::default().generate_from_slug(slug)
}

/// [`SeoGenerator::generate_for_property`] with the default generator.
pub fn generate_for_property(slug: &str, attributes: Option<&PropertyAttributes>) -> SeoMetadata {
    SeoGenerator::default().generate_for_property(slug, attributes)
}

/// [`SeoGenerator::generate_for_local_business`] with the default generator.
pub fn generate_for_local_business(slug: &str, location: &LocationAttributes) -> SeoMetadata {
    SeoGenerator::default().generate_for_local_business(slug, location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn austin() -> PropertyAttributes {
        PropertyAttributes {
            city: Some("Austin".into()),
            state: Some("TX".into()),
            acres: Some(10.0),
            price: Some(150000.0),
            ..Default::default()
        }
    }

    fn austin_office() -> LocationAttributes {
        LocationAttributes {
            name: "AcreageSale Austin".into(),
            city: "Austin".into(),
            state: "TX".into(),
            description: None,
        }
    }

    fn assert_caps(meta: &SeoMetadata) {
        assert!(meta.title.chars().count() <= DEFAULT_TITLE_MAX, "{}", meta.title);
        assert!(
            meta.description.chars().count() <= DEFAULT_DESCRIPTION_MAX,
            "{}",
            meta.description
        );
    }

    mod from_slug {
        use super::*;

        #[test]
        fn root_variants_return_home() {
            let home = special::home();
            for slug in ["", "/", "//"] {
                let meta = generate_from_slug(slug);
                assert_eq!(meta, home, "slug {slug:?}");
                assert_eq!(meta.canonical, BASE_URL);
            }
        }

        #[test]
        fn campaign_alias_canonicalizes() {
            let meta = generate_from_slug("sell-land-fast-ohio");
            assert_eq!(meta.focus_keyphrase, "sell land in ohio");
            assert_eq!(meta.canonical, "https://acreagesale.com/sell-land-fast-in-ohio/");
            assert_eq!(meta.structured_data.unwrap().type_name(), "Service");
        }

        #[test]
        fn campaign_alias_with_slashes() {
            let meta = generate_from_slug("/sell-land-fast-in-ohio/");
            assert_eq!(meta.focus_keyphrase, "sell land in ohio");
        }

        #[test]
        fn generic_path() {
            let meta = generate_from_slug("land-for-sale-in-iowa");
            assert_eq!(meta.focus_keyphrase, "land for sale in iowa");
            assert_eq!(meta.title, "Land For Sale In Iowa | AcreageSale");
            assert_eq!(meta.canonical, "https://acreagesale.com/land-for-sale-in-iowa");
            assert_eq!(meta.keyword_list()[0], "land for sale in iowa");
            assert!(meta.keyword_list().len() <= 8);
            assert!(meta.description.contains("Land For Sale In Iowa"));
            assert!(meta.description.contains("land for sale in iowa"));
            assert_eq!(meta.og_title, meta.title);
            assert_eq!(meta.og_description, meta.description);
            assert_caps(&meta);
        }

        #[test]
        fn generic_structured_data() {
            let meta = generate_from_slug("/ranches-in-wyoming/");
            let data = meta.structured_data.unwrap().to_value();
            assert_eq!(data["@type"], "WebPage");
            assert_eq!(data["isPartOf"]["@type"], "WebSite");
            let crumbs = data["breadcrumb"]["itemListElement"].as_array().unwrap();
            assert_eq!(crumbs.len(), 2);
            assert_eq!(crumbs[0]["name"], "Home");
            assert_eq!(crumbs[0]["item"], BASE_URL);
            assert_eq!(crumbs[1]["name"], "Ranches In Wyoming");
            assert_eq!(crumbs[1]["item"], "https://acreagesale.com/ranches-in-wyoming");
        }

        #[test]
        fn long_slug_truncates_exactly() {
            let slug = concat!(
                "cheap-owner-financed-hunting-land-for-sale-",
                "near-the-ozark-national-forest-arkansas",
            );
            let meta = generate_from_slug(slug);
            assert_eq!(meta.title.chars().count(), DEFAULT_TITLE_MAX);
            assert!(meta.title.ends_with("..."));
            assert_eq!(meta.description.chars().count(), DEFAULT_DESCRIPTION_MAX);
            assert!(meta.description.ends_with("..."));
        }

        #[test]
        fn caps_hold_for_odd_inputs() {
            let long = "z".repeat(500);
            let slugs = ["x", "---", "a/b/c", "ünïcödé-länd-ñ", long.as_str(), "tabs\tand spaces"];
            for slug in slugs {
                let meta = generate_from_slug(slug);
                assert_caps(&meta);
                assert!(meta.keyword_list().len() <= 8);
            }
        }

        #[test]
        fn idempotent() {
            assert_eq!(generate_from_slug("land-in-ohio"), generate_from_slug("land-in-ohio"));
        }
    }

    mod for_property {
        use super::*;

        #[test]
        fn full_listing() {
            let meta = generate_for_property("10-acres-austin-tx", Some(&austin()));
            assert_eq!(meta.title, "10 Acres in Austin, TX | AcreageSale");
            assert!(meta.description.contains("10 acres for sale in Austin, TX - $150,000."));
            assert_eq!(meta.focus_keyphrase, "10 acres austin tx");
            assert_eq!(meta.canonical, "https://acreagesale.com/10-acres-austin-tx");
            assert_caps(&meta);

            let data = meta.structured_data.unwrap().to_value();
            assert_eq!(data["@type"], "RealEstateListing");
            assert_eq!(data["offers"]["price"], 150000);
            assert_eq!(data["offers"]["priceCurrency"], "USD");
            assert_eq!(data["floorSize"]["value"], 10);
            assert_eq!(data["floorSize"]["unitText"], "acres");
            assert_eq!(data["address"]["addressLocality"], "Austin");
            assert_eq!(data["address"]["addressRegion"], "TX");
            assert!(data.get("geo").is_none());
            assert!(data.get("image").is_none());
        }

        #[test]
        fn keywords_capped_at_four() {
            let meta = generate_for_property("10-acres-austin-tx", Some(&austin()));
            assert_eq!(
                meta.keyword_list(),
                vec!["10 acres austin tx", "land Austin", "land TX", "Austin TX land"]
            );
        }

        #[test]
        fn location_without_acres() {
            let attrs = PropertyAttributes {
                acres: None,
                ..austin()
            };
            let meta = generate_for_property("austin-lot", Some(&attrs));
            assert_eq!(meta.title, "Land in Austin, TX | AcreageSale");
            assert!(meta.description.starts_with("Land for sale in Austin, TX."));
        }

        #[test]
        fn location_with_zero_acres() {
            let attrs = PropertyAttributes {
                acres: Some(0.0),
                ..austin()
            };
            let meta = generate_for_property("austin-lot", Some(&attrs));
            assert_eq!(meta.title, "Land in Austin, TX | AcreageSale");
            assert!(meta.description.starts_with("Land for sale in Austin, TX."));
            let data = meta.structured_data.unwrap().to_value();
            assert_eq!(data["offers"]["price"], 150000);
        }

        #[test]
        fn non_finite_numbers_are_absent() {
            let attrs = PropertyAttributes {
                acres: Some(f64::NAN),
                price: Some(f64::INFINITY),
                latitude: Some(f64::NAN),
                longitude: Some(-97.74),
                ..austin()
            };
            let meta = generate_for_property("austin-lot", Some(&attrs));
            assert_eq!(meta.title, "Land in Austin, TX | AcreageSale");
            assert!(!meta.description.contains("NaN"));
            let data = meta.structured_data.unwrap().to_value();
            for key in ["offers", "floorSize", "geo"] {
                assert!(data.get(key).is_none(), "unexpected {key}");
            }
        }

        #[test]
        fn no_location_falls_back_to_slug_title() {
            let attrs = PropertyAttributes {
                price: Some(5000.0),
                ..Default::default()
            };
            let meta = generate_for_property("lot-7-desert-view", Some(&attrs));
            assert_eq!(meta.title, "Lot 7 Desert View | AcreageSale");
            assert!(meta.description.starts_with("Lot 7 Desert View available now"));
            assert_eq!(meta.keywords, "lot 7 desert view");
            let data = meta.structured_data.unwrap().to_value();
            assert!(data.get("address").is_none());
            assert_eq!(data["offers"]["price"], 5000);
        }

        #[test]
        fn offers_iff_price() {
            let without = PropertyAttributes {
                price: None,
                ..austin()
            };
            for (attrs, has_offer) in [(austin(), true), (without, false)] {
                let data = generate_for_property("p", Some(&attrs))
                    .structured_data
                    .unwrap()
                    .to_value();
                assert_eq!(data["@type"], "RealEstateListing");
                assert_eq!(data.get("offers").is_some(), has_offer);
            }
        }

        #[test]
        fn geo_requires_both_coordinates() {
            let one = PropertyAttributes {
                latitude: Some(30.27),
                ..Default::default()
            };
            let data = generate_for_property("p", Some(&one)).structured_data.unwrap().to_value();
            assert!(data.get("geo").is_none());

            let both = PropertyAttributes {
                latitude: Some(30.27),
                longitude: Some(-97.74),
                ..Default::default()
            };
            let data = generate_for_property("p", Some(&both)).structured_data.unwrap().to_value();
            assert_eq!(data["geo"]["@type"], "GeoCoordinates");
            assert_eq!(data["geo"]["latitude"], 30.27);
            assert_eq!(data["geo"]["longitude"], -97.74);
        }

        #[test]
        fn images_only_when_non_empty() {
            let empty = PropertyAttributes {
                images: Some(Vec::new()),
                ..Default::default()
            };
            let data = generate_for_property("p", Some(&empty)).structured_data.unwrap().to_value();
            assert!(data.get("image").is_none());

            let some = PropertyAttributes {
                images: Some(vec!["https://cdn.acreagesale.com/p/1.jpg".into()]),
                ..Default::default()
            };
            let data = generate_for_property("p", Some(&some)).structured_data.unwrap().to_value();
            assert_eq!(data["image"][0], "https://cdn.acreagesale.com/p/1.jpg");
        }

        #[test]
        fn zip_alone_creates_address() {
            let attrs = PropertyAttributes {
                zip: Some("78701".into()),
                ..Default::default()
            };
            let data = generate_for_property("p", Some(&attrs)).structured_data.unwrap().to_value();
            assert_eq!(data["address"]["postalCode"], "78701");
            assert_eq!(data["address"]["addressCountry"], "US");
        }

        #[test]
        fn empty_strings_count_as_absent() {
            let attrs = PropertyAttributes {
                city: Some(String::new()),
                state: Some("TX".into()),
                ..Default::default()
            };
            let meta = generate_for_property("texas-lot", Some(&attrs));
            assert_eq!(meta.title, "Texas Lot | AcreageSale");
        }

        #[test]
        fn without_attributes_delegates() {
            assert_eq!(
                generate_for_property("land-for-sale-in-iowa", None),
                generate_from_slug("land-for-sale-in-iowa")
            );
        }

        #[test]
        fn empty_slug_is_home() {
            assert_eq!(generate_for_property("/", Some(&austin())), special::home());
        }

        #[test]
        fn deserializes_aliases() {
            let attrs: PropertyAttributes = serde_json::from_str(
                r#"{"city":"Austin","state":"TX","lat":30.2,"lng":-97.7,"postalCode":"78701"}"#,
            )
            .unwrap();
            assert_eq!(attrs.latitude, Some(30.2));
            assert_eq!(attrs.longitude, Some(-97.7));
            assert_eq!(attrs.zip.as_deref(), Some("78701"));
        }
    }

    mod for_local_business {
        use super::*;

        #[test]
        fn generated_description() {
            let meta = generate_for_local_business("austin-office", &austin_office());
            assert_eq!(meta.title, "AcreageSale Austin - Austin, TX | AcreageSale");
            assert_eq!(meta.focus_keyphrase, "land for sale Austin TX");
            assert!(meta.description.contains("Austin, TX"));
            assert_eq!(meta.keyword_list().len(), 4);
            assert_eq!(meta.canonical, "https://acreagesale.com/austin-office");
            assert_caps(&meta);
        }

        #[test]
        fn custom_description_truncated() {
            let location = LocationAttributes {
                description: Some("d".repeat(300)),
                ..austin_office()
            };
            let meta = generate_for_local_business("austin-office", &location);
            assert_eq!(meta.description.chars().count(), DEFAULT_DESCRIPTION_MAX);
            assert!(meta.description.ends_with("..."));
        }

        #[test]
        fn slug_is_normalized() {
            let meta = generate_for_local_business("/austin-office/", &austin_office());
            assert_eq!(meta.canonical, "https://acreagesale.com/austin-office");
        }

        #[test]
        fn structured_data_shape() {
            let data = generate_for_local_business("austin-office", &austin_office())
                .structured_data
                .unwrap()
                .to_value();
            assert_eq!(data["@type"], "LocalBusiness");
            assert_eq!(data["address"]["addressLocality"], "Austin");
            assert_eq!(data["areaServed"]["name"], "Austin");
            assert_eq!(data["areaServed"]["address"]["addressRegion"], "TX");
        }
    }

    mod generator {
        use super::*;

        #[test]
        fn custom_identity() {
            let generator = SeoGenerator::new("Ranch Finder", "https://ranch.example/");
            let meta = generator.generate_from_slug("ranches");
            assert_eq!(meta.title, "Ranches | Ranch Finder");
            assert_eq!(meta.canonical, "https://ranch.example/ranches");
        }

        #[test]
        fn custom_limits() {
            let generator = SeoGenerator::default().with_limits(20, 40);
            let meta = generator.generate_from_slug("land-for-sale-in-iowa");
            assert_eq!(meta.title.chars().count(), 20);
            assert_eq!(meta.description.chars().count(), 40);
        }

        #[test]
        fn limits_below_marker_still_hold() {
            let generator = SeoGenerator::default().with_limits(2, 1);
            let meta = generator.generate_from_slug("land-in-ohio");
            assert_eq!(meta.title, "..");
            assert_eq!(meta.description, ".");
        }

        #[test]
        fn serializes_camel_case() {
            let value = serde_json::to_value(generate_from_slug("land-in-ohio")).unwrap();
            for key in [
                "focusKeyphrase",
                "title",
                "description",
                "keywords",
                "canonical",
                "ogTitle",
                "ogDescription",
                "structuredData",
            ] {
                assert!(value.get(key).is_some(), "missing {key}");
            }
        }
    }
}
