//! schema.org JSON-LD objects.
//!
//! Each top-level variant serializes with `@context` and `@type` keys.
//! Optional sub-objects are `None` when their source data is missing and
//! are left out of the JSON entirely.

use serde::Serialize;
use serde_json::Number;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Structured data attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    WebPage(WebPage),
    Service(Service),
    RealEstateListing(RealEstateListing),
    LocalBusiness(LocalBusiness),
}

impl StructuredData {
    /// The schema.org `@type` of the top-level object.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::WebPage(_) => "WebPage",
            Self::Service(_) => "Service",
            Self::RealEstateListing(_) => "RealEstateListing",
            Self::LocalBusiness(_) => "LocalBusiness",
        }
    }

    /// Serialize to a JSON value for embedding or inspection.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Convert a float into a JSON number, emitting integers for whole values
/// so `150000.0` serializes as `150000`.
pub fn json_number(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

// ============================================================================
// WebPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub is_part_of: WebSite,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<BreadcrumbList>,
}

impl WebPage {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        site: WebSite,
    ) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "WebPage",
            name: name.into(),
            description: description.into(),
            url: url.into(),
            is_part_of: site,
            breadcrumb: None,
        }
    }

    pub fn with_breadcrumb(mut self, breadcrumb: BreadcrumbList) -> Self {
        self.breadcrumb = Some(breadcrumb);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSite {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

impl WebSite {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "WebSite",
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

impl BreadcrumbList {
    /// Build a breadcrumb trail from `(name, url)` pairs, numbered from 1.
    pub fn from_trail<'a>(trail: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let item_list_element = trail
            .into_iter()
            .enumerate()
            .map(|(i, (name, item))| ListItem {
                kind: "ListItem",
                position: i + 1,
                name: name.to_string(),
                item: item.to_string(),
            })
            .collect();
        Self {
            kind: "BreadcrumbList",
            item_list_element,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub service_type: String,
    pub provider: Organization,
    pub area_served: AdministrativeArea,
    pub offers: ServiceOffer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdministrativeArea {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl AdministrativeArea {
    pub fn state(name: impl Into<String>) -> Self {
        Self {
            kind: "State",
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub description: String,
    pub price: Number,
    pub price_currency: &'static str,
}

// ============================================================================
// RealEstateListing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateListing {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_size: Option<QuantitativeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
}

impl RealEstateListing {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "RealEstateListing",
            name: name.into(),
            description: description.into(),
            url: url.into(),
            offers: None,
            floor_size: None,
            address: None,
            geo: None,
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: Number,
    pub price_currency: &'static str,
    pub availability: &'static str,
}

impl Offer {
    pub fn in_stock_usd(price: f64) -> Self {
        Self {
            kind: "Offer",
            price: json_number(price),
            price_currency: "USD",
            availability: "https://schema.org/InStock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub value: Number,
    pub unit_text: &'static str,
}

impl QuantitativeValue {
    pub fn acres(value: f64) -> Self {
        Self {
            kind: "QuantitativeValue",
            value: json_number(value),
            unit_text: "acres",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: &'static str,
}

impl PostalAddress {
    /// A US address; `None` when locality, region and postal code are all absent.
    pub fn us(
        locality: Option<&str>,
        region: Option<&str>,
        postal_code: Option<&str>,
    ) -> Option<Self> {
        if locality.is_none() && region.is_none() && postal_code.is_none() {
            return None;
        }
        Some(Self {
            kind: "PostalAddress",
            address_locality: locality.map(str::to_string),
            address_region: region.map(str::to_string),
            postal_code: postal_code.map(str::to_string),
            address_country: "US",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "GeoCoordinates",
            latitude,
            longitude,
        }
    }
}

// ============================================================================
// LocalBusiness
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub address: PostalAddress,
    pub area_served: Place,
}

/// A served area with its own nested address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub address: PostalAddress,
}
