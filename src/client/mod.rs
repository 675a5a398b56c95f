pub mod api;
pub mod debounce;
pub mod traits;
pub mod types;

pub use api::ApiClient;
pub use debounce::{Debouncer, TYPEAHEAD_QUIET};
pub use traits::{CityDirectory, ListingSource};
pub use types::{CitySuggestion, ListingQuery};
