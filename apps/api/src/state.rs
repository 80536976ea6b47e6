use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::progress::store::ProgressStore;
use crate::skills::extractor::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Record fetcher behind the progress view. Default: PgProgressStore.
    pub progress_store: Arc<dyn ProgressStore>,
    /// Pluggable skill extractor. Default: RandomSkillExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
}
