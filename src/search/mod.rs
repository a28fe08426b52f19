//! Search: normalization, scoring, traversal, result shaping.

pub mod engine;
pub mod normalize;
pub mod score;

pub use engine::{search_outcome, DefaultSearchEngine, SearchEngine, SearchOutcome, SearchResult};
pub use normalize::{normalize, Query};
pub use score::{score, EXACT, NORM_CONTAINS, NORM_PREFIX, NO_MATCH, RAW_CONTAINS, RAW_PREFIX, TAG};
