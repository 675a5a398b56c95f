use anyhow::Result;
use async_trait::async_trait;

use crate::client::types::{CitySuggestion, ListingQuery};
use crate::models::Listing;

/// Common trait for listing providers
/// This allows swapping the marketplace API for fixtures in tests
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the listings matching a query
    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<Listing>>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;
}

/// City name autocomplete provider
#[async_trait]
pub trait CityDirectory: Send + Sync {
    /// Suggest cities matching a free-text fragment
    async fn suggest(&self, text: &str) -> Result<Vec<CitySuggestion>>;
}
