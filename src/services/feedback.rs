use std::sync::Mutex;

use crate::models::RatingEvent;

/// Tracing target for accepted ratings, so they can be filtered or routed apart
/// from request logs (e.g. `RUST_LOG=livestack::ratings=info`).
pub const RATING_TARGET: &str = "livestack::ratings";

/// Destination for accepted rating events
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackSink: Send + Sync {
    fn record(&self, event: &RatingEvent);
}

/// Emits one structured log line per rating
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FeedbackSink for TracingSink {
    fn record(&self, event: &RatingEvent) {
        tracing::info!(
            target: RATING_TARGET,
            content_id = %event.content_id,
            rating = %event.rating,
            received_at = %event.received_at.to_rfc3339(),
            "Rating received"
        );
    }
}

/// Keeps events in memory for inspection
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<RatingEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<RatingEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeedbackSink for MemorySink {
    fn record(&self, event: &RatingEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingValue;
    use chrono::Utc;
    use std::sync::Arc;

    fn event(content_id: &str, rating: i64) -> RatingEvent {
        RatingEvent {
            content_id: content_id.to_string(),
            rating: RatingValue::from(rating),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(&event("a", 1));
        sink.record(&event("b", 5));

        let events = sink.events();
        assert_eq!(sink.len(), 2);
        assert_eq!(events[0].content_id, "a");
        assert_eq!(events[1].rating, RatingValue::from(5));
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_tracing_sink_emits_rating_fields() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.record(&event("abc-123", 4));
        });

        let output = logs.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1, "unexpected log output: {}", output);
        assert!(lines[0].contains(RATING_TARGET));
        assert!(lines[0].contains("content_id=abc-123"));
        assert!(lines[0].contains("rating=4"));
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.record(&event("abc-123", 4));
    }
}
