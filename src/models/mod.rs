mod content;
mod rating;

pub use content::{ContentItem, EdgeId, Recommendation};
pub use rating::{
    RatingEvent, RatingOutcome, RatingRejection, RatingRequest, RatingStatus, RatingSubmission,
    RatingValue, INVALID_PAYLOAD_MESSAGE,
};
