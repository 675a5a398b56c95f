use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// User-chosen search constraints. An unset field imposes no constraint;
/// all present constraints must hold at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Minimum price per sqft
    pub min_price: Option<f64>,
    /// Maximum price per sqft
    pub max_price: Option<f64>,
    /// Minimum available space
    pub min_size: Option<f64>,
    /// Maximum available space
    pub max_size: Option<f64>,
    /// Accepted property categories; empty means no constraint
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub verified_only: bool,
    #[serde(default)]
    pub featured_only: bool,
}

impl FilterCriteria {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(min) = self.min_price {
            if listing.price_per_sqft < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if listing.price_per_sqft > max {
                return false;
            }
        }
        if let Some(min) = self.min_size {
            if listing.space_available < min {
                return false;
            }
        }
        if let Some(max) = self.max_size {
            if listing.space_available > max {
                return false;
            }
        }
        if !self.property_types.is_empty()
            && !self
                .property_types
                .iter()
                .any(|accepted| accepted == &listing.property_type)
        {
            return false;
        }
        if self.verified_only && !listing.is_verified {
            return false;
        }
        if self.featured_only && !listing.is_featured {
            return false;
        }
        true
    }
}

/// Listings satisfying every present constraint, in their input order
pub fn apply_filters(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingStatus, ListingType};
    use chrono::{TimeZone, Utc};

    fn listing(id: i64, price: f64, size: f64, property_type: &str) -> Listing {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Listing {
            id,
            address: format!("{} MIDC Road", id),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411018".to_string(),
            latitude: Some(18.6),
            longitude: Some(73.8),
            property_type: property_type.to_string(),
            listing_type: ListingType::Lease,
            price_per_sqft: price,
            space_available: size,
            size_unit: "sqft".to_string(),
            is_verified: id % 2 == 0,
            is_featured: false,
            status: ListingStatus::Active,
            distance: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let listings = vec![listing(1, 50.0, 1000.0, "Warehouse")];
        let kept = apply_filters(&listings, &FilterCriteria::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn price_range_is_inclusive_and_anded() {
        let listings = vec![
            listing(1, 20.0, 1000.0, "Warehouse"),
            listing(2, 50.0, 1000.0, "Warehouse"),
            listing(3, 90.0, 1000.0, "Warehouse"),
        ];
        let criteria = FilterCriteria {
            min_price: Some(20.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        let kept = apply_filters(&listings, &criteria);
        assert_eq!(kept.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn size_range_applies_to_space_available() {
        let listings = vec![
            listing(1, 30.0, 500.0, "Warehouse"),
            listing(2, 30.0, 5000.0, "Warehouse"),
        ];
        let criteria = FilterCriteria {
            min_size: Some(1000.0),
            ..Default::default()
        };
        let kept = apply_filters(&listings, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn empty_type_set_means_no_constraint() {
        let listings = vec![listing(1, 30.0, 1000.0, "Cold Storage")];
        let criteria = FilterCriteria::default();
        assert_eq!(apply_filters(&listings, &criteria).len(), 1);

        let narrowed = FilterCriteria {
            property_types: vec!["Warehouse".to_string()],
            ..Default::default()
        };
        assert!(apply_filters(&listings, &narrowed).is_empty());
    }

    #[test]
    fn type_set_membership_keeps_any_accepted_category() {
        let listings = vec![
            listing(1, 30.0, 1000.0, "Warehouse"),
            listing(2, 30.0, 1000.0, "Cold Storage"),
            listing(3, 30.0, 1000.0, "Open Yard"),
        ];
        let criteria = FilterCriteria {
            property_types: vec!["Warehouse".to_string(), "Open Yard".to_string()],
            ..Default::default()
        };
        let kept = apply_filters(&listings, &criteria);
        assert_eq!(kept.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn verified_only_drops_unverified() {
        let listings = vec![
            listing(1, 30.0, 1000.0, "Warehouse"),
            listing(2, 30.0, 1000.0, "Warehouse"),
        ];
        let criteria = FilterCriteria {
            verified_only: true,
            ..Default::default()
        };
        let kept = apply_filters(&listings, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn survivors_keep_their_input_order() {
        let listings = vec![
            listing(5, 80.0, 1000.0, "Warehouse"),
            listing(3, 10.0, 1000.0, "Warehouse"),
            listing(9, 40.0, 1000.0, "Warehouse"),
        ];
        let criteria = FilterCriteria {
            max_price: Some(80.0),
            ..Default::default()
        };
        let kept = apply_filters(&listings, &criteria);
        assert_eq!(kept.iter().map(|l| l.id).collect::<Vec<_>>(), vec![5, 3, 9]);
    }
}
