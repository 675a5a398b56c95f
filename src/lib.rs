//! Warehouse Scout - search pipeline for a warehouse listing marketplace.
//!
//! Listings are fetched as a read-only snapshot from the marketplace API,
//! then filtered, sorted, viewport-clipped and paginated in memory by a
//! [`search::SearchSession`].

pub mod client;
pub mod models;
pub mod search;
