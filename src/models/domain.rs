use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recommendable unit from the assessment catalog
///
/// `title` and `category` are required; everything else is optional display
/// data. Unknown keys from the catalog source are collected in `extra` and
/// passed through to responses unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub position_level: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user's self-reported answers, used as the recommendation query
///
/// Constructed fresh per request; never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub expertise_category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub position_level: Option<String>,
    /// Collected from the questionnaire but not weighted by scoring.
    #[serde(default)]
    pub experience_years: Option<f32>,
}

/// Scored recommendation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub provider: Option<String>,
    pub category: String,
    pub position_level: Option<String>,
    /// Band-capped confidence percentage in [0, 100].
    #[serde(rename = "match")]
    pub match_percent: u8,
    /// Internal additive score; not part of the wire contract.
    #[serde(skip)]
    pub raw_score: i64,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoredRecommendation {
    /// Build a recommendation from a scored catalog item, defaulting the
    /// display type when the item does not carry one.
    pub fn from_item(item: CatalogItem, raw_score: i64, match_percent: u8) -> Self {
        Self {
            title: item.title,
            item_type: item.item_type.unwrap_or_else(|| "Assessment".to_string()),
            provider: item.provider,
            category: item.category,
            position_level: item.position_level,
            match_percent,
            raw_score,
            description: item.description,
            extra: item.extra,
        }
    }

    /// Synthetic recommendation substituted when nothing in the catalog
    /// scored above zero. Guarantees the response is never empty.
    pub fn fallback() -> Self {
        Self {
            title: "General Software Engineering".to_string(),
            item_type: "Course".to_string(),
            provider: Some("SHL Academy".to_string()),
            category: "General".to_string(),
            position_level: None,
            match_percent: 80,
            raw_score: 0,
            description: Some(
                "A comprehensive guide to software development principles.".to_string(),
            ),
            extra: Map::new(),
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub category: i64,
    pub position_level: i64,
    pub skill: i64,
    /// Upper bound (inclusive) of the per-item jitter. Zero disables jitter.
    pub jitter_max: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 50,
            position_level: 25,
            skill: 15,
            jitter_max: 10,
        }
    }
}
