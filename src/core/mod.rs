// Core algorithm exports
pub mod recommender;
pub mod scoring;

pub use recommender::{RecommendResult, Recommender};
pub use scoring::{calculate_raw_score, match_percent};
