//! HTTP client for the recommendation service.
//!
//! This is the consumed side of the wire contract: what a dashboard or any
//! other caller does to fetch a recommendation and send back a rating.

use std::time::{Duration, Instant};

use reqwest::Client as HttpClient;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{RatingOutcome, RatingValue, Recommendation},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A recommendation together with the observed round-trip time
#[derive(Debug, Clone)]
pub struct FetchedRecommendation {
    pub recommendation: Recommendation,
    pub latency_ms: f64,
}

#[derive(Clone)]
pub struct LiveStackClient {
    http_client: HttpClient,
    base_url: String,
}

impl LiveStackClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Calls `GET /recommend`, forwarding `hint` only when it is non-empty
    pub async fn fetch_recommendation(
        &self,
        hint: Option<&str>,
    ) -> AppResult<FetchedRecommendation> {
        let mut request = self.http_client.get(format!("{}/recommend", self.base_url));
        if let Some(hint) = hint.filter(|h| !h.is_empty()) {
            request = request.query(&[("server_hint", hint)]);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }

        let recommendation = response.json::<Recommendation>().await?;

        tracing::debug!(
            content_id = %recommendation.content_id,
            server_id = %recommendation.server_id,
            latency_ms,
            "Fetched recommendation"
        );

        Ok(FetchedRecommendation {
            recommendation,
            latency_ms,
        })
    }

    /// Calls `POST /rate`. A validation failure comes back as an outcome with
    /// `status = error`, not as an `Err`.
    pub async fn send_rating(
        &self,
        content_id: &str,
        rating: impl Into<RatingValue>,
    ) -> AppResult<RatingOutcome> {
        let rating: RatingValue = rating.into();
        let payload = json!({
            "content_id": content_id,
            "rating": rating,
        });

        let response = self
            .http_client
            .post(format!("{}/rate", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Backend rating error ({}): {}",
                status, body
            )));
        }

        Ok(response.json::<RatingOutcome>().await?)
    }
}
