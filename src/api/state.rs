use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        Catalog, EdgeResolver, FeedbackSink, RandomSource, RecommendationService, ThreadRandom,
        TracingSink,
    },
};

/// Shared application state
///
/// Holds no per-request data; cloning only bumps the service refcount.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(service: RecommendationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds the production state: catalog and edges from `config`,
    /// thread-local randomness and tracing-backed rating log.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::build(config, Arc::new(ThreadRandom), Arc::new(TracingSink))
    }

    /// Same as [`AppState::from_config`] with caller-supplied randomness and sink
    pub fn build(
        config: &Config,
        rng: Arc<dyn RandomSource>,
        sink: Arc<dyn FeedbackSink>,
    ) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path, rng.clone())?,
            None => Catalog::builtin(rng.clone())?,
        };
        let resolver = EdgeResolver::new(config.known_edges.iter().cloned(), rng.clone())?;

        tracing::info!(
            catalog_items = catalog.len(),
            known_edges = ?config.known_edges,
            "Recommendation service configured"
        );

        Ok(Self::new(RecommendationService::new(
            catalog, resolver, rng, sink,
        )))
    }
}
