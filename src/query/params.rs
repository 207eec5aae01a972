use crate::error::{ListingError, Result};
use crate::models::{Availability, ListingType, PropertyType};
use crate::query::FilterSpec;
use std::collections::HashMap;
use url::form_urlencoded;

impl FilterSpec {
    /// Parse URL query parameters (`location`, `min_price`/`min`,
    /// `max_price`/`max`, `availability`, `type`, `property_type`) into a filter.
    ///
    /// Empty values behave like missing keys. Values that are present but
    /// unusable are rejected here so the engine never has to second-guess them.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.trim().trim_start_matches('?');
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.trim().to_string()))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        let min_amount = lookup(&params, &["min_price", "min"])
            .map(|(key, value)| parse_amount(key, value))
            .transpose()?;
        let max_amount = lookup(&params, &["max_price", "max"])
            .map(|(key, value)| parse_amount(key, value))
            .transpose()?;

        let availability = lookup(&params, &["availability"])
            .map(|(key, value)| {
                Availability::parse(value).ok_or_else(|| ListingError::invalid_filter(key, value))
            })
            .transpose()?;

        let listing_type = lookup(&params, &["type", "listing_type"])
            .map(|(key, value)| parse_page_type(key, value))
            .transpose()?;

        let property_type = lookup(&params, &["property_type"])
            .map(|(key, value)| {
                PropertyType::parse(value).ok_or_else(|| ListingError::invalid_filter(key, value))
            })
            .transpose()?;

        let location_substring = lookup(&params, &["location"]).map(|(_, value)| value.to_string());

        Ok(Self {
            location_substring,
            min_amount,
            max_amount,
            availability,
            listing_type,
            property_type,
        })
    }
}

/// First key present wins
fn lookup<'a>(
    params: &'a HashMap<String, String>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a str)> {
    keys.iter()
        .find_map(|key| params.get(*key).map(|value| (*key, value.as_str())))
}

fn parse_amount(key: &str, value: &str) -> Result<f64> {
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ListingError::invalid_filter(key, value))
}

/// `buy` is the page name for sale listings
fn parse_page_type(key: &str, value: &str) -> Result<ListingType> {
    if value.eq_ignore_ascii_case("buy") {
        return Ok(ListingType::Sale);
    }
    ListingType::parse(value).ok_or_else(|| ListingError::invalid_filter(key, value))
}
