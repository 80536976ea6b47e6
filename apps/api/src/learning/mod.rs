// Learning resources: filterable catalog and per-user progress tracking.

pub mod filter;
pub mod handlers;
