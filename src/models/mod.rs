pub mod raw;

use serde::{Deserialize, Serialize};

pub use raw::{LocalProperty, RawImage, RawProperty, RemoteLocation, RemoteProperty};

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    /// Parse the raw `status` / `listing_type` spelling (`sale`, `rent`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sale" => Some(Self::Sale),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
        }
    }
}

/// Kind of property, as classified by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Land,
    Commercial,
}

impl PropertyType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Some(Self::Apartment),
            "house" => Some(Self::House),
            "land" => Some(Self::Land),
            "commercial" => Some(Self::Commercial),
            _ => None,
        }
    }
}

/// Currency an amount is quoted in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Tzs,
    Usd,
}

impl Currency {
    /// Parse a currency code; anything unrecognised is quoted in TZS
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Self::Usd,
            _ => Self::Tzs,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Tzs => "TZS",
            Self::Usd => "USD",
        }
    }
}

/// Occupancy state of a listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    #[default]
    Available,
    Occupied,
    Booked,
}

impl Availability {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "occupied" => Some(Self::Occupied),
            "booked" => Some(Self::Booked),
            _ => None,
        }
    }

    /// Occupied and booked listings are both shown as taken
    pub fn is_taken(&self) -> bool {
        !matches!(self, Self::Available)
    }
}

/// Canonical, display-ready listing.
///
/// Built fresh from a [`RawProperty`] on every normalization pass and never
/// written back. `id` is the only key used for lookup and detail links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: i64,
    pub title: String,
    pub listing_type: ListingType,
    /// Only the backend classifies listings; catalogue entries have none
    pub property_type: Option<PropertyType>,
    /// Sale price or monthly rent, whichever `listing_type` makes active
    pub amount: Option<f64>,
    pub currency: Currency,
    pub location_label: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    /// Square meters
    pub area_size: Option<f64>,
    pub primary_image_url: Option<String>,
    pub availability: Availability,
    pub featured: bool,
}

/// One picture on the detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub label: Option<String>,
}

/// Detail page record: the listing plus the long-form content cards leave out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: ListingView,
    pub description: Option<String>,
    pub gallery: Vec<GalleryImage>,
}

impl ListingView {
    /// The active amount if it can be compared against a price bound.
    /// Zero counts as unknown here, matching how listings were always filtered.
    pub fn comparable_amount(&self) -> Option<f64> {
        self.amount.filter(|amount| *amount > 0.0)
    }
}
