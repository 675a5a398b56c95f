use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Listing};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinate pairs.
/// Out-of-range coordinates are not validated.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rectangular map viewport in lat/lng space, as reported by the map
/// component: north-east and south-west corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ViewportBounds {
    pub ne: Coordinates,
    pub sw: Coordinates,
}

impl ViewportBounds {
    /// Inclusive containment on both axes
    pub fn contains(&self, point: Coordinates) -> bool {
        self.sw.lat <= point.lat
            && point.lat <= self.ne.lat
            && self.sw.lng <= point.lng
            && point.lng <= self.ne.lng
    }
}

/// Listings inside the viewport. Listings without coordinates are skipped.
/// `None` bounds means the map has not reported a viewport yet; everything
/// passes through so results are visible before the map loads.
pub fn filter_in_bounds(listings: &[Listing], bounds: Option<&ViewportBounds>) -> Vec<Listing> {
    let Some(bounds) = bounds else {
        return listings.to_vec();
    };
    listings
        .iter()
        .filter(|listing| {
            listing
                .coordinates()
                .is_some_and(|point| bounds.contains(point))
        })
        .cloned()
        .collect()
}
