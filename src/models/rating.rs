use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Rating value as sent by callers: any JSON number or string.
/// The 1-5 range is a dashboard convention and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    Number(serde_json::Number),
    Text(String),
}

impl Display for RatingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingValue::Number(n) => write!(f, "{}", n),
            RatingValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for RatingValue {
    fn from(value: i32) -> Self {
        RatingValue::Number(value.into())
    }
}

impl From<i64> for RatingValue {
    fn from(value: i64) -> Self {
        RatingValue::Number(value.into())
    }
}

impl From<&str> for RatingValue {
    fn from(value: &str) -> Self {
        RatingValue::Text(value.to_string())
    }
}

/// Rating payload as received on the wire, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRequest {
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub rating: Option<RatingValue>,
}

/// Why a rating payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatingRejection {
    #[error("missing content_id")]
    MissingContentId,
    #[error("missing rating")]
    MissingRating,
    #[error("malformed body")]
    Malformed,
}

/// A validated rating submission
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSubmission {
    pub content_id: String,
    pub rating: RatingValue,
}

impl TryFrom<RatingRequest> for RatingSubmission {
    type Error = RatingRejection;

    fn try_from(request: RatingRequest) -> Result<Self, Self::Error> {
        let content_id = request
            .content_id
            .filter(|id| !id.is_empty())
            .ok_or(RatingRejection::MissingContentId)?;
        let rating = request.rating.ok_or(RatingRejection::MissingRating)?;

        Ok(Self { content_id, rating })
    }
}

/// Structured event handed to the feedback sink for every accepted rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingEvent {
    pub content_id: String,
    pub rating: RatingValue,
    pub received_at: DateTime<Utc>,
}

impl RatingEvent {
    pub fn new(submission: RatingSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            content_id: submission.content_id,
            rating: submission.rating,
            received_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingStatus {
    Ok,
    Error,
}

/// Response payload for a rating submission.
/// Failures travel in the payload, not in the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingOutcome {
    pub status: RatingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload";

impl RatingOutcome {
    pub fn accepted() -> Self {
        Self {
            status: RatingStatus::Ok,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: RatingStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == RatingStatus::Ok
    }
}
