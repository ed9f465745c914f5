use std::path::Path;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::ContentItem,
    services::random::RandomSource,
};

/// Fixed, read-only set of recommendable content
///
/// Built once at startup and shared across requests. Construction fails when the
/// item list is empty or any item has a blank title, so a running service always
/// has something to recommend.
pub struct Catalog {
    items: Vec<ContentItem>,
    rng: Arc<dyn RandomSource>,
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>, rng: Arc<dyn RandomSource>) -> AppResult<Self> {
        if items.is_empty() {
            return Err(AppError::Config("catalog is empty".to_string()));
        }

        if let Some(position) = items.iter().position(|item| item.title.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "catalog item {} has an empty title",
                position
            )));
        }

        Ok(Self { items, rng })
    }

    /// Catalog with the built-in demo content
    pub fn builtin(rng: Arc<dyn RandomSource>) -> AppResult<Self> {
        Self::new(builtin_items(), rng)
    }

    /// Loads a JSON array of `{ "title", "body" }` objects
    pub fn from_json_file(path: &Path, rng: Arc<dyn RandomSource>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<ContentItem> = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            items = items.len(),
            "Loaded catalog from file"
        );

        Self::new(items, rng)
    }

    /// Returns one item chosen uniformly at random
    pub fn pick_one(&self) -> &ContentItem {
        &self.items[self.rng.index(self.items.len())]
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Demo content served when no catalog file is configured
pub fn builtin_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "How TikTok Recommends Videos",
            "A deep dive into real-time recommendation engines.",
        ),
        ContentItem::new(
            "Distributed Systems 101",
            "What every engineer should know about distributed computing.",
        ),
        ContentItem::new(
            "Murdoch vs Redstone",
            "The history of media empires and power.",
        ),
        ContentItem::new(
            "Building a CDN Simulator",
            "Simulating multi-edge routing and latency.",
        ),
        ContentItem::new(
            "Ellison's AI Cluster",
            "Inside Oracle's 1.2 billion-watt GPU brain.",
        ),
    ]
}
