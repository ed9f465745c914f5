use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::EdgeId,
    services::random::RandomSource,
};

/// Decides which simulated edge serves a request
///
/// A non-empty hint wins verbatim, even when it names an edge outside the known
/// set, so callers can simulate edges that do not exist. Without a hint an edge
/// is drawn uniformly from the configured set.
pub struct EdgeResolver {
    known: Vec<EdgeId>,
    rng: Arc<dyn RandomSource>,
}

impl EdgeResolver {
    pub fn new<I, S>(known: I, rng: Arc<dyn RandomSource>) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known: Vec<EdgeId> = known.into_iter().map(EdgeId::new).collect();

        if known.is_empty() {
            return Err(AppError::Config("no known edges configured".to_string()));
        }

        Ok(Self { known, rng })
    }

    pub fn resolve(&self, hint: Option<&str>) -> EdgeId {
        match hint {
            Some(edge) if !edge.is_empty() => EdgeId::new(edge),
            _ => self.known[self.rng.index(self.known.len())].clone(),
        }
    }

    pub fn known_edges(&self) -> &[EdgeId] {
        &self.known
    }
}
