use tracing::{info, warn, Level};

use warehouse_scout::client::{ApiClient, CityDirectory, ListingQuery};
use warehouse_scout::search::{SearchSession, SessionPhase, SortKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("🏭 Warehouse Scout - listing search");
    info!("===================================");

    let base_url = std::env::var("WAREHOUSE_SCOUT_API")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let city_input = std::env::args().nth(1).unwrap_or_else(|| "Pune".to_string());

    let client = ApiClient::new(&base_url)?;

    // Resolve the city through the typeahead so the search has a reference point
    let suggestions = client.suggest(&city_input).await.unwrap_or_else(|err| {
        warn!("City typeahead unavailable: {:#}", err);
        Vec::new()
    });

    let mut query = ListingQuery::for_city(&city_input);
    if let Some(city) = suggestions.iter().find(|c| c.coordinates().is_some()) {
        info!(
            "Searching in {} ({})",
            city.name,
            city.state_code.as_deref().unwrap_or("-")
        );
        query.city = Some(city.name.clone());
        if let Some(point) = city.coordinates() {
            query = query.with_reference(point.lat, point.lng);
        }
    }

    let mut session = SearchSession::new(client);
    session.set_sort(SortKey::Distance);
    session.refresh(&query).await;

    if session.phase() == SessionPhase::Failed {
        warn!(
            "Search failed: {}",
            session.last_error().unwrap_or("unknown error")
        );
    }

    info!(
        "Showing {} of {} listings ({} fetched)",
        session.visible_count(),
        session.total_matching(),
        session.total_fetched()
    );
    println!();

    for (i, listing) in session.current_page().iter().enumerate() {
        println!("{}. {}, {}", i + 1, listing.address, listing.city);
        println!(
            "   {} {} available at {}/sqft",
            listing.space_available, listing.size_unit, listing.price_per_sqft
        );
        if let Some(km) = listing.distance {
            println!("   {:.1} km away", km);
        }
        println!("   ID: {}", listing.id);
        println!();
    }

    // Save the visible page for inspection
    let json = serde_json::to_string_pretty(session.current_page())?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved current page to search_results.json");

    Ok(())
}
