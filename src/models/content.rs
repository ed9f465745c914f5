use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A static catalog entry available for recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentItem {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Simulated delivery location identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record returned for a single get-recommendation call
///
/// `content_id` is minted per call and is unrelated to which catalog item was
/// picked. `server_id` and `server_region` currently carry the same edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub content_id: Uuid,
    pub title: String,
    pub body: String,
    pub server_id: String,
    pub server_region: String,
    pub timestamp: DateTime<Utc>,
}

impl Recommendation {
    /// Assembles a recommendation served from `edge`
    pub fn new(
        content_id: Uuid,
        item: &ContentItem,
        edge: &EdgeId,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            content_id,
            title: item.title.clone(),
            body: item.body.clone(),
            server_id: edge.as_str().to_string(),
            server_region: edge.as_str().to_string(),
            timestamp,
        }
    }
}
