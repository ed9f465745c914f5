use std::sync::Arc;

use chrono::Utc;

use crate::{
    models::{
        RatingEvent, RatingOutcome, RatingRejection, RatingRequest, RatingSubmission,
        Recommendation, INVALID_PAYLOAD_MESSAGE,
    },
    services::{
        catalog::Catalog,
        edge::EdgeResolver,
        feedback::FeedbackSink,
        random::{new_content_id, RandomSource},
    },
};

/// Serves recommendations and accepts rating feedback
///
/// Stateless across calls: every recommendation gets a fresh content id and
/// nothing is retained once the response is built. Ratings are not checked
/// against previously issued ids.
pub struct RecommendationService {
    catalog: Catalog,
    resolver: EdgeResolver,
    rng: Arc<dyn RandomSource>,
    sink: Arc<dyn FeedbackSink>,
}

impl RecommendationService {
    pub fn new(
        catalog: Catalog,
        resolver: EdgeResolver,
        rng: Arc<dyn RandomSource>,
        sink: Arc<dyn FeedbackSink>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            rng,
            sink,
        }
    }

    pub fn get_recommendation(&self, hint: Option<&str>) -> Recommendation {
        let edge = self.resolver.resolve(hint);
        let item = self.catalog.pick_one();
        let content_id = new_content_id(self.rng.as_ref());

        tracing::debug!(
            content_id = %content_id,
            edge = %edge,
            title = %item.title,
            hinted = hint.is_some_and(|h| !h.is_empty()),
            "Issued recommendation"
        );

        Recommendation::new(content_id, item, &edge, Utc::now())
    }

    /// Validates a rating payload and forwards it to the feedback sink.
    /// Missing fields produce a failure outcome, never an error.
    pub fn submit_rating(&self, request: RatingRequest) -> RatingOutcome {
        match RatingSubmission::try_from(request) {
            Ok(submission) => {
                self.sink.record(&RatingEvent::new(submission, Utc::now()));
                RatingOutcome::accepted()
            }
            Err(reason) => self.reject(reason),
        }
    }

    /// Outcome for a body that could not be read as a rating payload at all
    pub fn reject_malformed(&self) -> RatingOutcome {
        self.reject(RatingRejection::Malformed)
    }

    fn reject(&self, reason: RatingRejection) -> RatingOutcome {
        tracing::warn!(reason = %reason, "Rejected rating submission");
        RatingOutcome::rejected(INVALID_PAYLOAD_MESSAGE)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &EdgeResolver {
        &self.resolver
    }
}
