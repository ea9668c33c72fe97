use rand::Rng;

use crate::core::scoring::{calculate_raw_score, match_percent};
use crate::models::{CatalogItem, ScoredRecommendation, ScoringWeights, UserProfile};

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendResult {
    pub recommendations: Vec<ScoredRecommendation>,
    pub total_items: usize,
    pub fallback_used: bool,
}

/// Main recommendation orchestrator
///
/// # Pipeline stages
/// 1. Score every catalog item against the profile
/// 2. Drop items with no relevance signal (raw score <= 0)
/// 3. Convert raw scores to band-capped match percentages
/// 4. Rank, truncate, and substitute the fallback when nothing survives
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Produce ranked recommendations for a profile
    ///
    /// The jitter source is supplied by the caller so repeated calls can be
    /// pinned to a fixed sequence in tests. Ties on match percentage keep
    /// catalog order: the percentage is a capped projection of the raw
    /// score, so re-breaking ties by raw score would be arbitrary.
    ///
    /// # Arguments
    /// * `profile` - The user's self-reported answers
    /// * `catalog` - All loaded catalog items
    /// * `limit` - Maximum number of recommendations to return
    /// * `rng` - Source for the per-item score jitter
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        catalog: Vec<CatalogItem>,
        limit: usize,
        rng: &mut R,
    ) -> RecommendResult {
        let total_items = catalog.len();

        let mut recommendations: Vec<ScoredRecommendation> = catalog
            .into_iter()
            .filter_map(|item| {
                let raw_score = calculate_raw_score(&item, profile, &self.weights, rng);

                // No relevance signal at all
                if raw_score <= 0 {
                    return None;
                }

                let category_matched = item.category == profile.expertise_category;
                let percent = match_percent(raw_score, category_matched);

                Some(ScoredRecommendation::from_item(item, raw_score, percent))
            })
            .collect();

        // Stable sort: equal percentages keep their catalog order
        recommendations.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
        recommendations.truncate(limit);

        let fallback_used = recommendations.is_empty();
        if fallback_used {
            recommendations.push(ScoredRecommendation::fallback());
        }

        RecommendResult {
            recommendations,
            total_items,
            fallback_used,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn create_item(title: &str, category: &str, tags: &[&str], level: Option<&str>) -> CatalogItem {
        CatalogItem {
            title: title.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            position_level: level.map(|l| l.to_string()),
            description: None,
            provider: None,
            item_type: None,
            extra: Map::new(),
        }
    }

    fn create_profile() -> UserProfile {
        UserProfile {
            expertise_category: "Backend Development".to_string(),
            skills: vec!["Python".to_string(), "Go".to_string()],
            position_level: Some("Senior".to_string()),
            experience_years: Some(5.0),
        }
    }

    fn zero_jitter_recommender() -> Recommender {
        Recommender::new(ScoringWeights {
            jitter_max: 0,
            ..ScoringWeights::default()
        })
    }

    #[test]
    fn test_recommend_ranks_by_match_percent() {
        let recommender = zero_jitter_recommender();
        let profile = create_profile();

        let catalog = vec![
            create_item("Cloud Basics", "DevOps", &["Go"], None),
            create_item("Backend Mastery", "Backend Development", &["Python", "Go"], Some("Senior")),
            create_item("Frontend Basics", "Frontend Development", &["JavaScript"], Some("Entry")),
        ];

        let result = recommender.recommend(&profile, catalog, 3, &mut rand::rng());

        // Zero-signal frontend item is discarded
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].title, "Backend Mastery");
        assert_eq!(result.recommendations[0].match_percent, 99);
        assert_eq!(result.recommendations[0].raw_score, 105);
        assert_eq!(result.recommendations[1].title, "Cloud Basics");
        assert!(!result.fallback_used);
        assert_eq!(result.total_items, 3);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = zero_jitter_recommender();
        let profile = create_profile();

        let catalog: Vec<CatalogItem> = (0..20)
            .map(|i| {
                create_item(
                    &format!("Item {}", i),
                    "Backend Development",
                    &["Python"],
                    None,
                )
            })
            .collect();

        let result = recommender.recommend(&profile, catalog, 3, &mut rand::rng());

        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.total_items, 20);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let recommender = zero_jitter_recommender();
        let profile = create_profile();

        // Identical scores: order in must equal order out
        let catalog = vec![
            create_item("First", "Backend Development", &["Python"], None),
            create_item("Second", "Backend Development", &["Go"], None),
            create_item("Third", "Backend Development", &["Python"], None),
        ];

        let result = recommender.recommend(&profile, catalog, 5, &mut rand::rng());

        let titles: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        let recommender = Recommender::with_default_weights();
        let profile = create_profile();

        let result = recommender.recommend(&profile, vec![], 3, &mut rand::rng());

        assert_eq!(result.recommendations.len(), 1);
        assert!(result.fallback_used);
        assert_eq!(result.recommendations[0].title, "General Software Engineering");
        assert_eq!(result.recommendations[0].match_percent, 80);
    }

    #[test]
    fn test_zero_signal_catalog_falls_back() {
        let recommender = zero_jitter_recommender();
        let profile = create_profile();

        let catalog = vec![
            create_item("Nursing 101", "Healthcare", &["Nursing"], Some("Entry")),
            create_item("Claims Handling", "Insurance", &["Claims"], Some("Mid")),
        ];

        let result = recommender.recommend(&profile, catalog, 3, &mut rand::rng());

        assert_eq!(result.recommendations.len(), 1);
        assert!(result.fallback_used);
    }

    #[test]
    fn test_default_type_applied() {
        let recommender = zero_jitter_recommender();
        let profile = create_profile();

        let mut item = create_item("Backend Mastery", "Backend Development", &[], None);
        item.item_type = None;

        let result = recommender.recommend(&profile, vec![item], 3, &mut rand::rng());

        assert_eq!(result.recommendations[0].item_type, "Assessment");
    }
}
