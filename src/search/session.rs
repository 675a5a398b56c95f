use tracing::{debug, info, warn};

use crate::client::traits::ListingSource;
use crate::client::types::ListingQuery;
use crate::models::{Coordinates, Listing};
use crate::search::filter::{apply_filters, FilterCriteria};
use crate::search::geo::{self, ViewportBounds};
use crate::search::page::{paginate, PAGE_SIZE};
use crate::search::sort::{sort_listings, SortKey};

/// Where the session is in its fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing fetched yet
    Empty,
    /// A fetch is in flight
    Loading,
    /// Snapshot held and derived views are current
    Ready,
    /// The last fetch failed; the snapshot is empty
    Failed,
}

/// One search session: a read-only listing snapshot plus the filter, sort,
/// viewport and page state layered over it.
///
/// Derived views are rebuilt on each trigger, never incrementally patched:
/// the visible set is always a subset of the matching set, which is always
/// a subset of the snapshot. `refresh` needs `&mut self`, so a session can
/// never have two fetches racing each other.
pub struct SearchSession<S> {
    source: S,
    /// Raw fetched listings, distances attached
    snapshot: Vec<Listing>,
    /// Attribute-filtered and sorted
    matching: Vec<Listing>,
    /// Viewport view over `matching`
    visible: Vec<Listing>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    reference: Option<Coordinates>,
    bounds: Option<ViewportBounds>,
    page: usize,
    phase: SessionPhase,
    last_error: Option<String>,
}

impl<S: ListingSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: Vec::new(),
            matching: Vec::new(),
            visible: Vec::new(),
            criteria: FilterCriteria::default(),
            sort_key: SortKey::Newest,
            reference: None,
            bounds: None,
            page: 1,
            phase: SessionPhase::Empty,
            last_error: None,
        }
    }

    /// Replace the snapshot with a fresh fetch for `query`.
    ///
    /// Distances are computed from the query's reference point (and cleared
    /// when it has none), stored criteria and sort are re-applied, the
    /// viewport resets to open and the page to 1. A failed fetch leaves an
    /// empty snapshot and records the error on the session instead of
    /// propagating it.
    pub async fn refresh(&mut self, query: &ListingQuery) {
        self.phase = SessionPhase::Loading;
        self.reference = query.reference();

        match self.source.fetch(query).await {
            Ok(mut listings) => {
                match self.reference {
                    Some(origin) => attach_distances(&mut listings, origin),
                    None => clear_distances(&mut listings),
                }
                info!(
                    "Fetched {} listings from {}",
                    listings.len(),
                    self.source.source_name()
                );
                self.snapshot = listings;
                self.last_error = None;
                self.phase = SessionPhase::Ready;
            }
            Err(err) => {
                warn!("Listing fetch failed: {:#}", err);
                self.snapshot = Vec::new();
                self.last_error = Some(format!("{:#}", err));
                self.phase = SessionPhase::Failed;
            }
        }

        self.bounds = None;
        self.rebuild_matching();
    }

    /// Re-filter and re-sort the held snapshot; no refetch
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.rebuild_matching();
    }

    /// Re-sort the held snapshot; no refetch
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.rebuild_matching();
    }

    /// Recompute the viewport view; no refetch, no re-sort
    pub fn set_bounds(&mut self, bounds: ViewportBounds) {
        self.bounds = Some(bounds);
        self.rebuild_visible();
    }

    /// Back to the default-open viewport
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
        self.rebuild_visible();
    }

    /// Jump to a 1-based page; pages past the end show as empty
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The visible slice for the current page
    pub fn current_page(&self) -> &[Listing] {
        paginate(&self.visible, self.page, PAGE_SIZE)
    }

    /// Every listing in the current viewport, sorted
    pub fn visible(&self) -> &[Listing] {
        &self.visible
    }

    /// Every listing passing the attribute filter, sorted
    pub fn matching(&self) -> &[Listing] {
        &self.matching
    }

    /// Size of the raw snapshot, for "0 of N" messaging
    pub fn total_fetched(&self) -> usize {
        self.snapshot.len()
    }

    /// Size of the attribute-filtered set ("Y" in "showing X of Y")
    pub fn total_matching(&self) -> usize {
        self.matching.len()
    }

    /// Size of the viewport view ("X" in "showing X of Y")
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    fn rebuild_matching(&mut self) {
        let filtered = apply_filters(&self.snapshot, &self.criteria);
        self.matching = sort_listings(&filtered, self.sort_key);
        debug!(
            "{} of {} listings match the current filters",
            self.matching.len(),
            self.snapshot.len()
        );
        self.rebuild_visible();
    }

    fn rebuild_visible(&mut self) {
        self.visible = geo::filter_in_bounds(&self.matching, self.bounds.as_ref());
        self.page = 1;
    }
}

fn attach_distances(listings: &mut [Listing], origin: Coordinates) {
    for listing in listings.iter_mut() {
        listing.distance = listing
            .coordinates()
            .map(|point| geo::haversine_km(origin, point));
    }
}

fn clear_distances(listings: &mut [Listing]) {
    for listing in listings.iter_mut() {
        listing.distance = None;
    }
}
