//! Pathfinder Algo - Recommendation service for the Career Path Finder platform
//!
//! This library provides the core scoring-and-ranking algorithm used to turn
//! a user's self-reported profile and an assessment catalog into ranked
//! recommendations with match percentages.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_percent, RecommendResult, Recommender};
pub use crate::models::{CatalogItem, RecommendRequest, RecommendResponse, ScoredRecommendation, ScoringWeights, UserProfile};
pub use crate::services::CatalogStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(match_percent(105, true), 99);
        assert_eq!(ScoringWeights::default().category, 50);
    }
}
