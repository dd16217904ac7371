//! Services for fetching, reshaping and persisting profile data

pub mod aggregator;
pub mod calendar;
pub mod fetcher;
pub mod saved;

pub use aggregator::ProfileStats;
pub use fetcher::ProfileFetcher;
pub use saved::SavedStore;
