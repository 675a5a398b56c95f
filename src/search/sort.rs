use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// Selectable result orderings. Wire names match the UI's sort dropdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    PriceLow,
    PriceHigh,
    SizeLarge,
    SizeSmall,
    Distance,
}

/// Returns a sorted copy of the collection. The sort is stable, so listings
/// with equal keys keep their input order. Listings with no computed
/// distance sort after all listings that have one.
pub fn sort_listings(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    match key {
        SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price_per_sqft.total_cmp(&b.price_per_sqft)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price_per_sqft.total_cmp(&a.price_per_sqft)),
        SortKey::SizeLarge => {
            sorted.sort_by(|a, b| b.space_available.total_cmp(&a.space_available));
        }
        SortKey::SizeSmall => {
            sorted.sort_by(|a, b| a.space_available.total_cmp(&b.space_available));
        }
        SortKey::Distance => sorted.sort_by(|a, b| match (a.distance, b.distance) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
    sorted
}
