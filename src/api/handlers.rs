use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    middleware::request_id::RequestId,
    models::{RatingOutcome, RatingRequest, Recommendation},
};

use super::AppState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecommendQuery {
    pub server_hint: Option<String>,
}

impl RecommendQuery {
    /// Repeated `server_hint` parameters resolve to the last one
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let server_hint = pairs
            .into_iter()
            .filter(|(key, _)| key == "server_hint")
            .map(|(_, value)| value)
            .last();

        Self { server_hint }
    }
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns a recommendation, served from the hinted edge when one is given
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Recommendation> {
    // An unreadable query string is served as if no hint was given
    let params = match query {
        Ok(Query(pairs)) => RecommendQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Unreadable recommend query"
            );
            RecommendQuery::default()
        }
    };

    let recommendation = state
        .service
        .get_recommendation(params.server_hint.as_deref());

    tracing::info!(
        request_id = %request_id,
        content_id = %recommendation.content_id,
        server_id = %recommendation.server_id,
        "Served recommendation"
    );

    Json(recommendation)
}

/// Accepts a rating for a previously issued content id
///
/// Unreadable bodies are answered with the same failure payload as missing
/// fields instead of an extractor rejection.
pub async fn rate(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RatingRequest>, JsonRejection>,
) -> Json<RatingOutcome> {
    let outcome = match payload {
        Ok(Json(request)) => state.service.submit_rating(request),
        Err(rejection) => {
            tracing::debug!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Unreadable rating body"
            );
            state.service.reject_malformed()
        }
    };

    tracing::info!(
        request_id = %request_id,
        accepted = outcome.is_accepted(),
        "Processed rating submission"
    );

    Json(outcome)
}
