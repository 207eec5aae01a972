pub mod params;
pub mod types;

pub use types::FilterSpec;

use crate::models::ListingView;
use tracing::debug;

/// Filter `listings` by `filter`, keeping input order.
pub fn query(listings: &[ListingView], filter: &FilterSpec) -> Vec<ListingView> {
    if filter.is_empty() {
        return listings.to_vec();
    }

    let result: Vec<ListingView> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect();

    debug!("Query kept {} of {} listings", result.len(), listings.len());
    result
}

/// Up to `limit` featured listings, in input order
pub fn featured(listings: &[ListingView], limit: usize) -> Vec<ListingView> {
    listings
        .iter()
        .filter(|listing| listing.featured)
        .take(limit)
        .cloned()
        .collect()
}

pub fn find_by_id(listings: &[ListingView], id: i64) -> Option<&ListingView> {
    listings.iter().find(|listing| listing.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Currency, ListingType, PropertyType};
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    fn listing(
        id: i64,
        listing_type: ListingType,
        amount: Option<f64>,
        location: &str,
    ) -> ListingView {
        ListingView {
            id,
            title: format!("Listing {}", id),
            listing_type,
            property_type: None,
            amount,
            currency: Currency::Tzs,
            location_label: location.to_string(),
            bedrooms: None,
            bathrooms: None,
            area_size: None,
            primary_image_url: None,
            availability: Availability::Available,
            featured: false,
        }
    }

    fn catalogue() -> Vec<ListingView> {
        let mut listings = vec![
            listing(1, ListingType::Sale, Some(1_850_000_000.0), "Oyster Bay, Dar es Salaam"),
            listing(2, ListingType::Rent, Some(2_500_000.0), "City Centre, Dar es Salaam"),
            listing(3, ListingType::Sale, Some(3_200_000_000.0), "Masaki, Dar es Salaam"),
            listing(4, ListingType::Rent, Some(4_200_000.0), "Mikocheni, Dar es Salaam"),
            listing(5, ListingType::Rent, None, "Sinza, Dar es Salaam"),
            listing(6, ListingType::Sale, Some(0.0), "Kawe, Arusha"),
        ];
        listings[0].featured = true;
        listings[2].featured = true;
        listings[3].featured = true;
        listings[3].availability = Availability::Occupied;
        listings
    }

    fn ids(listings: &[ListingView]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let listings = catalogue();
        assert_eq!(query(&listings, &FilterSpec::default()), listings);
    }

    #[test]
    fn test_empty_input() {
        let filter = FilterSpec {
            min_amount: Some(1.0),
            ..FilterSpec::default()
        };
        assert!(query(&[], &filter).is_empty());
    }

    #[test]
    fn test_listing_type_partition() {
        let listings = vec![
            listing(1, ListingType::Sale, Some(1_850_000_000.0), ""),
            listing(2, ListingType::Rent, Some(2_500_000.0), ""),
        ];
        let result = query(&listings, &FilterSpec::for_type(ListingType::Rent));
        assert_eq!(result, vec![listings[1].clone()]);
    }

    #[test]
    fn test_location_is_case_insensitive() {
        let filter = FilterSpec {
            location_substring: Some("  MASAKI ".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&catalogue(), &filter)), vec![3]);

        let blank = FilterSpec {
            location_substring: Some("   ".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(query(&catalogue(), &blank).len(), catalogue().len());
    }

    #[test]
    fn test_bounds_are_inclusive_and_skip_unknown_amounts() {
        let filter = FilterSpec {
            min_amount: Some(2_500_000.0),
            max_amount: Some(1_850_000_000.0),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&catalogue(), &filter)), vec![1, 2, 4]);

        // Zero and missing amounts drop out as soon as any bound is set
        let filter = FilterSpec {
            min_amount: Some(0.0),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&catalogue(), &filter)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_non_finite_bounds_are_ignored() {
        let filter = FilterSpec {
            min_amount: Some(f64::NAN),
            max_amount: Some(f64::INFINITY),
            ..FilterSpec::default()
        };
        assert_eq!(query(&catalogue(), &filter), catalogue());
    }

    #[test]
    fn test_combined_constraints() {
        let filter = FilterSpec {
            location_substring: Some("dar es salaam".to_string()),
            listing_type: Some(ListingType::Rent),
            availability: Some(Availability::Available),
            max_amount: Some(5_000_000.0),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&catalogue(), &filter)), vec![2]);
    }

    #[test]
    fn test_featured_respects_limit_and_order() {
        let listings = catalogue();
        let result = featured(&listings, 2);
        assert_eq!(ids(&result), vec![1, 3]);
        assert!(result.iter().all(|l| l.featured));
        assert!(featured(&listings, 0).is_empty());
        assert_eq!(ids(&featured(&listings, 10)), vec![1, 3, 4]);
    }

    #[test]
    fn test_property_type_skips_unknown_kinds() {
        let mut listings = catalogue();
        listings[1].property_type = Some(PropertyType::Apartment);
        listings[2].property_type = Some(PropertyType::House);

        let filter = FilterSpec {
            property_type: Some(PropertyType::Apartment),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&listings, &filter)), vec![2]);
    }

    #[test]
    fn test_find_by_id() {
        let listings = catalogue();
        assert_eq!(find_by_id(&listings, 4).map(|l| l.id), Some(4));
        assert!(find_by_id(&listings, 99).is_none());
    }

    fn arb_listing() -> impl Strategy<Value = ListingView> {
        let locations = prop::sample::select(vec![
            "Oyster Bay, Dar es Salaam",
            "Masaki, Dar es Salaam",
            "Njiro, Arusha",
            "",
        ]);
        (
            0_i64..1_000,
            any::<bool>(),
            prop::option::of(0.0_f64..1e10),
            locations,
        )
            .prop_map(|(id, rent, amount, location)| {
                let listing_type = if rent { ListingType::Rent } else { ListingType::Sale };
                listing(id, listing_type, amount, location)
            })
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]
        #[test]
        fn empty_filter_returns_input_unchanged(
            listings in prop::collection::vec(arb_listing(), 0..24)
        ) {
            prop_assert_eq!(query(&listings, &FilterSpec::default()), listings);
        }

        #[test]
        fn inverted_bounds_yield_nothing(
            listings in prop::collection::vec(arb_listing(), 0..24),
            max in 0.0_f64..1e10,
            gap in 1e-3_f64..1e9
        ) {
            let filter = FilterSpec {
                min_amount: Some(max + gap),
                max_amount: Some(max),
                ..FilterSpec::default()
            };
            prop_assert!(query(&listings, &filter).is_empty());
        }

        #[test]
        fn widening_bounds_keeps_every_match(
            listings in prop::collection::vec(arb_listing(), 0..24),
            min in 0.0_f64..1e10,
            span in 0.0_f64..1e10,
            widen_low in 0.0_f64..1e9,
            widen_high in 0.0_f64..1e9
        ) {
            let narrow = FilterSpec {
                min_amount: Some(min),
                max_amount: Some(min + span),
                ..FilterSpec::default()
            };
            let wide = FilterSpec {
                min_amount: Some(min - widen_low),
                max_amount: Some(min + span + widen_high),
                ..FilterSpec::default()
            };

            let wide_ids = ids(&query(&listings, &wide));
            for id in ids(&query(&listings, &narrow)) {
                prop_assert!(wide_ids.contains(&id));
            }
        }
    }
}
