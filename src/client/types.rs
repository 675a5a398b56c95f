use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Query parameters for the listing-search endpoint. `None` fields are
/// omitted from the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// City to search in
    pub city: Option<String>,
    /// State to search in
    pub state: Option<String>,
    /// Property category (free text, as listed)
    pub property_type: Option<String>,
    /// Search radius in kilometers around the reference point
    pub distance: Option<f64>,
    /// Reference point latitude
    pub lat: Option<f64>,
    /// Reference point longitude
    pub lng: Option<f64>,
}

impl ListingQuery {
    /// Query scoped to a city
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    /// Attach a reference point; listing distances are computed from it
    pub fn with_reference(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// The reference point when both components are set
    pub fn reference(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// One row from the city typeahead endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySuggestion {
    pub name: String,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl CitySuggestion {
    /// Coordinates when the directory knows them
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}
