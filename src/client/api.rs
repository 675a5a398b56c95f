use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::traits::{CityDirectory, ListingSource};
use crate::client::types::{CitySuggestion, ListingQuery};
use crate::models::Listing;

/// Marketplace API client
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    success: bool,
    #[serde(default)]
    listings: Vec<Listing>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CityEnvelope {
    success: bool,
    #[serde(default)]
    cities: Vec<CitySuggestion>,
}

impl ApiClient {
    /// Create a client for the marketplace API at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("warehouse-scout/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        let url = format!("{}/api/listings/search", self.base_url);
        debug!("Fetching listings from {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .context("Failed to reach listing search endpoint")?;

        if !response.status().is_success() {
            warn!("Listing search returned status: {}", response.status());
            anyhow::bail!("Listing search failed: {}", response.status());
        }

        let envelope: ListingEnvelope = response
            .json()
            .await
            .context("Failed to decode listing search response")?;

        if !envelope.success {
            let reason = envelope
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            anyhow::bail!("Listing search rejected: {}", reason);
        }

        debug!("Received {} listings", envelope.listings.len());
        Ok(envelope.listings)
    }

    fn source_name(&self) -> &'static str {
        "marketplace-api"
    }
}

#[async_trait]
impl CityDirectory for ApiClient {
    async fn suggest(&self, text: &str) -> Result<Vec<CitySuggestion>> {
        let url = format!("{}/api/cities", self.base_url);
        debug!("City typeahead for '{}'", text);

        let response = self
            .client
            .get(&url)
            .query(&[("search", text)])
            .send()
            .await
            .context("Failed to reach city typeahead endpoint")?;

        if !response.status().is_success() {
            warn!("City typeahead returned status: {}", response.status());
            anyhow::bail!("City typeahead failed: {}", response.status());
        }

        let envelope: CityEnvelope = response
            .json()
            .await
            .context("Failed to decode city typeahead response")?;

        if !envelope.success {
            anyhow::bail!("City typeahead rejected the query");
        }

        Ok(envelope.cities)
    }
}
