// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CatalogItem, ScoredRecommendation, ScoringWeights, UserProfile};
pub use requests::RecommendRequest;
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse, RecommendResponse};
