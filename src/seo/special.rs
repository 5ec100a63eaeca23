//! Hand-authored metadata for pages that are not derived from their slug.
//!
//! The home page bundle is returned for the empty slug. Campaign pages are
//! looked up by exact slug; several spellings may share one bundle.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::schema::{
    AdministrativeArea, Organization, SCHEMA_CONTEXT, Service, ServiceOffer, StructuredData,
    WebPage, WebSite, json_number,
};
use super::{BASE_URL, SITE_NAME, SeoMetadata};

/// Builds a fixed bundle.
type Bundle = fn() -> SeoMetadata;

/// Exact-slug lookup table consulted before procedural derivation.
static SPECIAL_PAGES: LazyLock<FxHashMap<&'static str, Bundle>> = LazyLock::new(|| {
    let mut table: FxHashMap<&'static str, Bundle> = FxHashMap::default();
    for alias in OHIO_CAMPAIGN_ALIASES {
        table.insert(alias, ohio_campaign);
    }
    table
});

/// Slug spellings served by the Ohio seller campaign page.
pub const OHIO_CAMPAIGN_ALIASES: [&str; 2] = ["sell-land-fast-ohio", "sell-land-fast-in-ohio"];

/// Look up a hand-authored bundle for a normalized, non-empty slug.
pub fn lookup(slug: &str) -> Option<SeoMetadata> {
    SPECIAL_PAGES.get(slug).map(|bundle| bundle())
}

/// Metadata for the site root.
pub fn home() -> SeoMetadata {
    let title = "Buy & Sell Land Nationwide | AcreageSale";
    let description = "Buy land anywhere in the U.S. or sell your land fast for cash with \
                       AcreageSale. Browse rural acreage, ranches and lots, or request a fair \
                       cash offer today.";

    let page = WebPage::new(
        title,
        description,
        BASE_URL,
        WebSite::new(SITE_NAME, BASE_URL),
    );

    SeoMetadata {
        focus_keyphrase: "land for sale".into(),
        title: title.into(),
        description: description.into(),
        keywords: "land for sale, sell land fast, buy land, rural acreage, cash for land, \
                   owner financed land"
            .into(),
        canonical: BASE_URL.into(),
        og_title: title.into(),
        og_description: description.into(),
        structured_data: Some(StructuredData::WebPage(page)),
    }
}

fn ohio_campaign() -> SeoMetadata {
    let title = "Sell Land Fast in Ohio | Cash Offers | AcreageSale";
    let description = "Sell your Ohio land fast for cash. AcreageSale buys vacant land in every \
                       Ohio county with no realtor fees or commissions and can close in as \
                       little as 14 days.";
    let canonical = format!("{BASE_URL}/sell-land-fast-in-ohio/");

    let service = Service {
        context: SCHEMA_CONTEXT,
        kind: "Service",
        name: "Sell Land Fast in Ohio".into(),
        description: description.into(),
        url: canonical.clone(),
        service_type: "Land Buying".into(),
        provider: Organization::new(SITE_NAME, BASE_URL),
        area_served: AdministrativeArea::state("Ohio"),
        offers: ServiceOffer {
            kind: "Offer",
            description: "Free, no-obligation cash offer for Ohio land".into(),
            price: json_number(0.0),
            price_currency: "USD",
        },
    };

    SeoMetadata {
        focus_keyphrase: "sell land in ohio".into(),
        title: title.into(),
        description: description.into(),
        keywords: "sell land in ohio, sell land fast ohio, cash for land ohio, \
                   we buy land ohio, sell vacant land ohio"
            .into(),
        canonical,
        og_title: title.into(),
        og_description: description.into(),
        structured_data: Some(StructuredData::Service(service)),
    }
}
