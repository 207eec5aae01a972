//! Listing query-and-render pipeline for the Lora Real Estate site.
//!
//! Raw property records (local catalogue or backend API shape) are
//! normalized into [`ListingView`]s, filtered by [`FilterSpec`], and turned
//! into display-ready [`ListingCard`]s.

pub mod cards;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod query;
pub mod sources;

pub use cards::ListingCard;
pub use error::{ListingError, Result};
pub use format::{format_price, format_price_text, price_label};
pub use models::{
    Availability, Currency, GalleryImage, ListingDetail, ListingType, ListingView, PropertyType,
    RawProperty,
};
pub use normalize::{normalize, normalize_batch, normalize_detail, BatchPolicy, NormalizedBatch};
pub use query::{featured, find_by_id, query, FilterSpec};
