// Progress dashboard: raw per-user records in, aggregate stats and activity feed out.
// The aggregator is pure; fetching goes through the ProgressStore trait.

pub mod aggregator;
pub mod handlers;
pub mod models;
pub mod store;
