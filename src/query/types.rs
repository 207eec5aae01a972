use crate::models::{Availability, ListingType, ListingView, PropertyType};
use serde::{Deserialize, Serialize};

/// Filter parameters for a listing query. Every field is optional;
/// an absent field places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring of the location label
    pub location_substring: Option<String>,
    /// Inclusive lower bound on the active amount
    pub min_amount: Option<f64>,
    /// Inclusive upper bound on the active amount
    pub max_amount: Option<f64>,
    pub availability: Option<Availability>,
    /// Buy vs rent page partition
    pub listing_type: Option<ListingType>,
    /// Never matches listings whose kind is unknown
    pub property_type: Option<PropertyType>,
}

impl FilterSpec {
    pub fn for_type(listing_type: ListingType) -> Self {
        Self {
            listing_type: Some(listing_type),
            ..Self::default()
        }
    }

    /// True when no field constrains anything
    pub fn is_empty(&self) -> bool {
        self.location_needle().is_none()
            && self.bounds() == (None, None)
            && self.availability.is_none()
            && self.listing_type.is_none()
            && self.property_type.is_none()
    }

    /// Conjunction of every set constraint, cheapest discriminator first.
    pub fn matches(&self, listing: &ListingView) -> bool {
        if let Some(listing_type) = self.listing_type {
            if listing.listing_type != listing_type {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if listing.property_type != Some(property_type) {
                return false;
            }
        }

        if let Some(availability) = self.availability {
            if listing.availability != availability {
                return false;
            }
        }

        if let Some(needle) = self.location_needle() {
            if !listing.location_label.to_lowercase().contains(&needle) {
                return false;
            }
        }

        match self.bounds() {
            (None, None) => true,
            (min, max) => match listing.comparable_amount() {
                // Unknown price can't satisfy a bound
                None => false,
                Some(amount) => {
                    min.is_none_or(|min| amount >= min) && max.is_none_or(|max| amount <= max)
                }
            },
        }
    }

    fn location_needle(&self) -> Option<String> {
        self.location_substring
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Non-finite bounds are treated as absent
    fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (
            self.min_amount.filter(|v| v.is_finite()),
            self.max_amount.filter(|v| v.is_finite()),
        )
    }
}
