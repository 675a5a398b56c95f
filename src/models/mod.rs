use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation lifecycle state of a listing.
/// Owned by the admin panel; the search pipeline only reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingStatus {
    Pending,
    Active,
    Rejected,
}

/// How the space is offered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingType {
    Sale,
    Rent,
    Lease,
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub property_type: String,
    pub listing_type: ListingType,
    // Records can arrive without price or size; both behave as 0 downstream
    #[serde(default)]
    pub price_per_sqft: f64,
    #[serde(default)]
    pub space_available: f64,
    pub size_unit: String,
    pub is_verified: bool,
    pub is_featured: bool,
    pub status: ListingStatus,
    /// Great-circle distance in km from the search reference point.
    /// Recomputed on every fetch, never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Coordinates when both components are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}
