use rand::Rng;

use crate::models::{CatalogItem, ScoringWeights, UserProfile};

/// Calculate the raw additive score for a catalog item against a profile
///
/// Scoring formula (default weights):
/// - +50 if the item's category equals the profile's expertise category
/// - +25 if both position levels are present and equal
/// - +15 per profile skill found in the item's tags (uncapped)
/// - +jitter in [0, jitter_max] for variety between repeated queries
///
/// All comparisons are exact, case-sensitive string equality. The jitter is
/// drawn from the caller-supplied source; `jitter_max = 0` makes the score
/// a pure function of its inputs.
pub fn calculate_raw_score<R: Rng + ?Sized>(
    item: &CatalogItem,
    profile: &UserProfile,
    weights: &ScoringWeights,
    rng: &mut R,
) -> i64 {
    let mut score = 0;

    if item.category == profile.expertise_category {
        score += weights.category;
    }

    if position_level_matches(item.position_level.as_deref(), profile.position_level.as_deref()) {
        score += weights.position_level;
    }

    for skill in &profile.skills {
        if item.tags.iter().any(|tag| tag == skill) {
            score += weights.skill;
        }
    }

    if weights.jitter_max > 0 {
        score += rng.random_range(0..=weights.jitter_max);
    }

    score
}

/// Two sides match only when both carry a non-empty level and the levels are
/// equal. Absent-vs-absent is not a match, so missing data earns no reward.
#[inline]
fn position_level_matches(item_level: Option<&str>, profile_level: Option<&str>) -> bool {
    match (item_level, profile_level) {
        (Some(a), Some(b)) => !a.is_empty() && a == b,
        _ => false,
    }
}

/// Convert a raw score into the band-capped match percentage
///
/// Items in the user's expertise category map to `min(99, 50 + raw)`;
/// everything else maps to `min(80, 20 + raw)`. Category is a hard gate on
/// top confidence: no amount of skill or jitter accumulation lets a
/// non-category item pass 80%.
#[inline]
pub fn match_percent(raw_score: i64, category_matched: bool) -> u8 {
    let percent = if category_matched {
        (50 + raw_score).min(99)
    } else {
        (20 + raw_score).min(80)
    };

    percent.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn create_test_item(category: &str, tags: &[&str], position_level: Option<&str>) -> CatalogItem {
        CatalogItem {
            title: "Test Item".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            position_level: position_level.map(|l| l.to_string()),
            description: None,
            provider: None,
            item_type: None,
            extra: Map::new(),
        }
    }

    fn create_test_profile(category: &str, skills: &[&str], position_level: Option<&str>) -> UserProfile {
        UserProfile {
            expertise_category: category.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            position_level: position_level.map(|l| l.to_string()),
            experience_years: Some(2.0),
        }
    }

    fn zero_jitter_weights() -> ScoringWeights {
        ScoringWeights {
            jitter_max: 0,
            ..ScoringWeights::default()
        }
    }

    #[test]
    fn test_full_match_score() {
        let item = create_test_item(
            "Backend Development",
            &["Python", "Go", "Java"],
            Some("Senior"),
        );
        let profile = create_test_profile("Backend Development", &["Python", "Go"], Some("Senior"));

        let score = calculate_raw_score(&item, &profile, &zero_jitter_weights(), &mut rand::rng());

        // 50 (category) + 25 (level) + 15 + 15 (two skills)
        assert_eq!(score, 105);
        assert_eq!(match_percent(score, true), 99);
    }

    #[test]
    fn test_no_signal_scores_zero() {
        let item = create_test_item("Frontend Development", &["JavaScript"], Some("Entry"));
        let profile = create_test_profile("Backend Development", &["Python", "Go"], Some("Senior"));

        let score = calculate_raw_score(&item, &profile, &zero_jitter_weights(), &mut rand::rng());

        assert_eq!(score, 0);
    }

    #[test]
    fn test_skill_matches_are_uncapped() {
        let item = create_test_item(
            "Data Science",
            &["Python", "Java", "Go", "Rust", "TypeScript"],
            None,
        );
        let profile = create_test_profile(
            "Backend Development",
            &["Python", "Java", "Go", "Rust", "TypeScript"],
            None,
        );

        let score = calculate_raw_score(&item, &profile, &zero_jitter_weights(), &mut rand::rng());

        assert_eq!(score, 75);
        // Capped by the non-category band regardless of raw score
        assert_eq!(match_percent(score, false), 80);
    }

    #[test]
    fn test_absent_position_levels_do_not_match() {
        let item = create_test_item("Backend Development", &[], None);
        let profile = create_test_profile("Backend Development", &[], None);

        let score = calculate_raw_score(&item, &profile, &zero_jitter_weights(), &mut rand::rng());

        // Category only, no reward for missing-vs-missing levels
        assert_eq!(score, 50);
    }

    #[test]
    fn test_empty_position_level_does_not_match() {
        assert!(!position_level_matches(Some(""), Some("")));
        assert!(!position_level_matches(Some("Senior"), None));
        assert!(!position_level_matches(None, Some("Senior")));
        assert!(position_level_matches(Some("Senior"), Some("Senior")));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let item = create_test_item("backend development", &["python"], Some("senior"));
        let profile = create_test_profile("Backend Development", &["Python"], Some("Senior"));

        let score = calculate_raw_score(&item, &profile, &zero_jitter_weights(), &mut rand::rng());

        assert_eq!(score, 0);
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let item = create_test_item("Backend Development", &[], None);
        let profile = create_test_profile("Backend Development", &[], None);
        let weights = ScoringWeights::default();

        let mut rng = rand::rng();
        for _ in 0..100 {
            let score = calculate_raw_score(&item, &profile, &weights, &mut rng);
            assert!((50..=60).contains(&score), "score {} outside jitter bounds", score);
        }
    }

    #[test]
    fn test_band_ceilings() {
        assert_eq!(match_percent(1000, true), 99);
        assert_eq!(match_percent(1000, false), 80);
        assert_eq!(match_percent(10, true), 60);
        assert_eq!(match_percent(10, false), 30);
    }
}
