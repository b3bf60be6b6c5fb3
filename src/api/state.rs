use std::sync::Arc;

use crate::config::Config;
use crate::services::{MovieInfo, MovieInfoSource, RecommendationClient, Recommender};

/// Shared application state
///
/// The service clients are constructed once at startup and shared
/// read-only across interactions; nothing here is mutated after
/// construction.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<dyn Recommender>,
    pub movie_info: Arc<dyn MovieInfoSource>,
}

impl AppState {
    /// Builds the real clients from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            recommender: Arc::new(RecommendationClient::new(config)),
            movie_info: Arc::new(MovieInfo::new(config)),
        }
    }

    /// Assembles state from explicit sources; used by tests to substitute
    /// stub implementations
    pub fn with_sources(
        recommender: Arc<dyn Recommender>,
        movie_info: Arc<dyn MovieInfoSource>,
    ) -> Self {
        Self {
            recommender,
            movie_info,
        }
    }
}
