pub mod filter;
pub mod geo;
pub mod page;
pub mod session;
pub mod sort;

pub use filter::FilterCriteria;
pub use geo::ViewportBounds;
pub use page::PAGE_SIZE;
pub use session::{SearchSession, SessionPhase};
pub use sort::SortKey;
