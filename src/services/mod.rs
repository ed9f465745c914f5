pub mod catalog;
pub mod edge;
pub mod feedback;
pub mod random;
pub mod recommendations;

pub use catalog::Catalog;
pub use edge::EdgeResolver;
pub use feedback::{FeedbackSink, MemorySink, TracingSink};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use recommendations::RecommendationService;
