use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserProfile;

/// Request to find recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub expertise_category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub position_level: Option<String>,
    #[serde(default)]
    pub experience_years: Option<f32>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 10))]
    pub limit: usize,
}

fn default_limit() -> usize {
    3
}

impl RecommendRequest {
    /// Extract the profile portion of the request.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            expertise_category: self.expertise_category.clone(),
            skills: self.skills.clone(),
            position_level: self.position_level.clone(),
            experience_years: self.experience_years,
        }
    }
}

/// Health check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRequest;
