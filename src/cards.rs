use crate::format::price_label;
use crate::models::ListingView;
use serde::Serialize;

pub const EMPTY_STATE_TITLE: &str = "No properties found";
pub const EMPTY_STATE_MESSAGE: &str =
    "Check back soon for new listings, or contact us to discuss your requirements.";

/// Everything a renderer needs to draw one property card
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    pub id: i64,
    pub title: String,
    pub price_label: String,
    pub badge: &'static str,
    pub occupied: bool,
    pub location_label: String,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub detail_href: String,
}

impl ListingCard {
    pub fn from_view(listing: &ListingView) -> Self {
        let mut features = Vec::new();
        if let Some(bedrooms) = listing.bedrooms {
            features.push(format!("{} Beds", bedrooms));
        }
        if let Some(bathrooms) = listing.bathrooms {
            features.push(format!("{} Baths", bathrooms));
        }
        if let Some(area) = listing.area_size {
            features.push(format!("{} m²", area));
        }

        Self {
            id: listing.id,
            title: listing.title.clone(),
            price_label: price_label(listing),
            badge: listing.listing_type.badge(),
            occupied: listing.availability.is_taken(),
            location_label: listing.location_label.clone(),
            features,
            image_url: listing.primary_image_url.clone(),
            detail_href: format!("property.html?id={}", listing.id),
        }
    }
}

pub fn cards(listings: &[ListingView]) -> Vec<ListingCard> {
    listings.iter().map(ListingCard::from_view).collect()
}
