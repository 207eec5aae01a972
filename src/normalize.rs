use crate::error::{ListingError, Result};
use crate::models::{
    Availability, Currency, GalleryImage, ListingDetail, ListingType, ListingView, LocalProperty,
    PropertyType, RawImage, RawProperty, RemoteLocation, RemoteProperty,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// What to do with a record that fails normalization inside a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Log the failure, remember it, keep going
    #[default]
    SkipMalformed,
    /// Stop at the first malformed record
    Abort,
}

/// Output of one normalization pass over a fetched batch
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedBatch {
    pub listings: Vec<ListingView>,
    #[serde(skip)]
    pub skipped: Vec<ListingError>,
    pub normalized_at: DateTime<Utc>,
    /// Source record of each entry in `listings`, same order
    #[serde(skip)]
    records: Vec<RawProperty>,
}

impl NormalizedBatch {
    /// Detail page record for `id`, if that listing made it into the batch
    pub fn detail(&self, id: i64) -> Option<ListingDetail> {
        self.listings
            .iter()
            .zip(&self.records)
            .find(|(listing, _)| listing.id == id)
            .map(|(listing, raw)| build_detail(listing.clone(), raw))
    }
}

/// Convert a raw record of either shape into a canonical [`ListingView`].
pub fn normalize(raw: &RawProperty) -> Result<ListingView> {
    match raw {
        RawProperty::Local(local) => normalize_local(local),
        RawProperty::Remote(remote) => normalize_remote(remote),
    }
}

/// Detail page record: the canonical listing plus description and gallery.
pub fn normalize_detail(raw: &RawProperty) -> Result<ListingDetail> {
    normalize(raw).map(|listing| build_detail(listing, raw))
}

/// Decode and normalize a fetched batch record by record, applying `policy`
/// to every record that can't become a listing.
pub fn normalize_batch(records: Vec<Value>, policy: BatchPolicy) -> Result<NormalizedBatch> {
    let mut listings = Vec::with_capacity(records.len());
    let mut sources = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        let outcome = RawProperty::from_value(record)
            .and_then(|raw| normalize(&raw).map(|view| (view, raw)));

        match outcome {
            Ok((view, raw)) => {
                listings.push(view);
                sources.push(raw);
            }
            Err(err) => match policy {
                BatchPolicy::Abort => return Err(err),
                BatchPolicy::SkipMalformed => {
                    warn!("Skipping record: {}", err);
                    skipped.push(err);
                }
            },
        }
    }

    info!(
        "Normalized {} listings ({} skipped)",
        listings.len(),
        skipped.len()
    );

    Ok(NormalizedBatch {
        listings,
        skipped,
        normalized_at: Utc::now(),
        records: sources,
    })
}

fn build_detail(listing: ListingView, raw: &RawProperty) -> ListingDetail {
    let (description, gallery) = match raw {
        RawProperty::Local(local) => (
            non_blank(local.description.as_deref()),
            gallery(local.images.as_deref().unwrap_or_default()),
        ),
        RawProperty::Remote(remote) => {
            let mut images = gallery(remote.gallery_images.as_deref().unwrap_or_default());
            // The cover photo leads the gallery unless it is already in it
            if let Some(main) = &listing.primary_image_url {
                if !images.iter().any(|image| &image.url == main) {
                    images.insert(
                        0,
                        GalleryImage {
                            url: main.clone(),
                            label: None,
                        },
                    );
                }
            }
            (non_blank(remote.description.as_deref()), images)
        }
    };

    ListingDetail {
        listing,
        description,
        gallery,
    }
}

fn gallery(images: &[RawImage]) -> Vec<GalleryImage> {
    images
        .iter()
        .filter_map(|image| {
            Some(GalleryImage {
                url: non_blank(image.url())?,
                label: non_blank(image.label()),
            })
        })
        .collect()
}

fn normalize_local(local: &LocalProperty) -> Result<ListingView> {
    let (id, title, listing_type) =
        required_fields(local.id, local.title.as_deref(), local.status.as_deref())?;

    let amount = match listing_type {
        ListingType::Sale => local.price,
        ListingType::Rent => local.rent_price,
    };

    let primary_image_url = local
        .images
        .as_ref()
        .and_then(|images| images.first())
        .and_then(|image| non_blank(image.url()));

    Ok(ListingView {
        id,
        title,
        listing_type,
        property_type: None,
        amount: non_negative(amount, id, "amount"),
        currency: Currency::Tzs,
        location_label: local
            .location
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        bedrooms: local.bedrooms,
        bathrooms: local.bathrooms,
        area_size: non_negative(local.size, id, "size"),
        primary_image_url,
        availability: Availability::Available,
        featured: local.featured.unwrap_or(false),
    })
}

fn normalize_remote(remote: &RemoteProperty) -> Result<ListingView> {
    let (id, title, listing_type) = required_fields(
        remote.id,
        remote.title.as_deref(),
        remote.listing_type.as_deref(),
    )?;

    Ok(ListingView {
        id,
        title,
        listing_type,
        property_type: remote.property_type.as_deref().and_then(PropertyType::parse),
        amount: non_negative(remote.price, id, "price"),
        currency: remote
            .currency
            .as_deref()
            .map(Currency::from_code)
            .unwrap_or_default(),
        location_label: location_label(remote.location.as_ref()),
        bedrooms: remote.bedrooms,
        bathrooms: remote.bathrooms,
        area_size: non_negative(remote.area_size, id, "area_size"),
        primary_image_url: non_blank(remote.main_image.as_deref()),
        availability: remote
            .availability
            .as_deref()
            .and_then(Availability::parse)
            .unwrap_or_default(),
        featured: remote.featured.unwrap_or(false),
    })
}

fn required_fields(
    id: Option<i64>,
    title: Option<&str>,
    listing_type: Option<&str>,
) -> Result<(i64, String, ListingType)> {
    let id = id.ok_or_else(|| ListingError::malformed(None, "id"))?;
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ListingError::malformed(Some(id), "title"))?;
    let listing_type = listing_type
        .and_then(ListingType::parse)
        .ok_or_else(|| ListingError::malformed(Some(id), "listingType"))?;

    Ok((id, title.to_string(), listing_type))
}

/// "{name}, {city}" with empty parts dropped
fn location_label(location: Option<&RemoteLocation>) -> String {
    let Some(location) = location else {
        return String::new();
    };

    [location.name.as_deref(), location.city.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_negative(value: Option<f64>, id: i64, field: &str) -> Option<f64> {
    match value {
        Some(v) if v < 0.0 => {
            debug!("Dropping negative {} ({}) on listing {}", field, v, id);
            None
        }
        other => other,
    }
}
