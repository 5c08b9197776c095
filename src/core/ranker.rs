use std::cmp::Ordering;

use crate::core::filters::passes_filters;
use crate::core::scoring::compatibility_score;
use crate::models::{
    MatchFilters, PartnerProfile, ScoredPartner, ScoringWeights, SortKey, UserProfile,
};

/// Result of a ranking run
///
/// `scored` holds every candidate with its computed score, before
/// filtering; callers that log score history feed from it. `ranked` is
/// the filtered, sorted view returned to clients, and `best_match` is
/// the top survivor by compatibility regardless of the active sort.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub scored: Vec<ScoredPartner>,
    pub ranked: Vec<ScoredPartner>,
    pub total_results: usize,
    pub best_match: Option<ScoredPartner>,
}

/// Scoring and ranking orchestrator
///
/// Stateless apart from the configured weights; every call is an
/// independent, synchronous computation over its inputs.
#[derive(Debug, Clone)]
pub struct Matchmaker {
    weights: ScoringWeights,
}

impl Matchmaker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score, filter and sort a candidate set for a user
    ///
    /// Every candidate is scored first; filters only shape the returned
    /// view. Sorting is stable, so equal keys keep their incoming order.
    pub fn rank(
        &self,
        user: &UserProfile,
        partners: Vec<PartnerProfile>,
        filters: &MatchFilters,
        sort_by: SortKey,
    ) -> RankOutcome {
        let scored: Vec<ScoredPartner> = partners
            .into_iter()
            .map(|partner| {
                let score = compatibility_score(user, &partner, &self.weights);
                ScoredPartner {
                    partner,
                    compatibility_score: score,
                }
            })
            .collect();

        let mut ranked: Vec<ScoredPartner> = scored
            .iter()
            .filter(|candidate| {
                passes_filters(&candidate.partner, filters, &user.search_preferences)
            })
            .cloned()
            .collect();

        // First survivor holding the maximum score, independent of sort_by
        let best_match = ranked
            .iter()
            .fold(None::<&ScoredPartner>, |best, candidate| match best {
                Some(current) if current.compatibility_score >= candidate.compatibility_score => {
                    best
                }
                _ => Some(candidate),
            })
            .cloned();

        match sort_by {
            SortKey::Compatibility => {
                ranked.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
            }
            SortKey::Age => {
                ranked.sort_by(|a, b| cmp_age(a.partner.age, b.partner.age));
            }
            SortKey::Name => {
                ranked.sort_by(|a, b| cmp_name(&a.partner.name, &b.partner.name));
            }
        }

        RankOutcome {
            total_results: ranked.len(),
            best_match,
            ranked,
            scored,
        }
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Ascending by age; partners without one sort last
fn cmp_age(a: Option<u8>, b: Option<u8>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive lexicographic name order
fn cmp_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchPreferences;

    fn create_partner(id: u64, name: &str, age: u8, city: &str, hobbies: &[&str]) -> PartnerProfile {
        PartnerProfile {
            id,
            name: name.to_string(),
            age: Some(age),
            city: Some(city.to_string()),
            hobbies: hobbies.iter().map(|h| h.to_string()).collect(),
            personality: vec![],
            description: None,
            image: None,
            is_active: true,
        }
    }

    fn create_user() -> UserProfile {
        UserProfile {
            name: "Claire".to_string(),
            age: Some(30),
            city: Some("Paris".to_string()),
            selected_traits: vec![],
            selected_hobbies: vec!["hiking".to_string()],
            description: None,
            search_preferences: SearchPreferences::default(),
        }
    }

    #[test]
    fn test_every_candidate_is_scored_before_filtering() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "Emma", 29, "Paris", &["hiking"]),
            create_partner(2, "Nina", 60, "Lyon", &[]),
        ];

        let filters = MatchFilters {
            max_age: 40,
            ..MatchFilters::default()
        };
        let outcome = matchmaker.rank(&create_user(), partners, &filters, SortKey::Compatibility);

        assert_eq!(outcome.scored.len(), 2);
        assert_eq!(outcome.ranked.len(), 1);
        assert_eq!(outcome.total_results, 1);
        assert_eq!(outcome.ranked[0].partner.id, 1);
    }

    #[test]
    fn test_sorted_by_compatibility_descending() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "Nina", 55, "Lyon", &[]),
            create_partner(2, "Emma", 29, "Paris", &["hiking"]),
            create_partner(3, "Lou", 31, "Paris", &[]),
        ];

        let outcome = matchmaker.rank(
            &create_user(),
            partners,
            &MatchFilters::default(),
            SortKey::Compatibility,
        );

        let ids: Vec<u64> = outcome.ranked.iter().map(|s| s.partner.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        for pair in outcome.ranked.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn test_best_match_ignores_active_sort() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "Zoé", 24, "Lille", &[]),
            create_partner(2, "Amine", 29, "Paris", &["hiking"]),
        ];

        let outcome = matchmaker.rank(
            &create_user(),
            partners,
            &MatchFilters::default(),
            SortKey::Age,
        );

        // Age sort puts Zoé first, but the best match is still Amine
        assert_eq!(outcome.ranked[0].partner.id, 1);
        assert_eq!(outcome.best_match.as_ref().unwrap().partner.id, 2);
    }

    #[test]
    fn test_best_match_tie_keeps_first_survivor() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "Emma", 29, "Paris", &[]),
            create_partner(2, "Lou", 31, "Paris", &[]),
        ];

        let outcome = matchmaker.rank(
            &create_user(),
            partners,
            &MatchFilters::default(),
            SortKey::Name,
        );

        let best = outcome.best_match.unwrap();
        assert_eq!(best.partner.id, 1);
        assert_eq!(best.compatibility_score, outcome.ranked.iter().map(|s| s.compatibility_score).max().unwrap());
    }

    #[test]
    fn test_empty_survivor_set_has_no_best_match() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![create_partner(1, "Emma", 29, "Paris", &[])];

        let filters = MatchFilters {
            city: "marseille".to_string(),
            ..MatchFilters::default()
        };
        let outcome = matchmaker.rank(&create_user(), partners, &filters, SortKey::Compatibility);

        assert!(outcome.ranked.is_empty());
        assert_eq!(outcome.total_results, 0);
        assert!(outcome.best_match.is_none());
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "zoe", 30, "Paris", &[]),
            create_partner(2, "Amine", 30, "Paris", &[]),
            create_partner(3, "Chloé", 30, "Paris", &[]),
        ];

        let outcome = matchmaker.rank(
            &create_user(),
            partners,
            &MatchFilters::default(),
            SortKey::Name,
        );

        let names: Vec<&str> = outcome.ranked.iter().map(|s| s.partner.name.as_str()).collect();
        assert_eq!(names, vec!["Amine", "Chloé", "zoe"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let matchmaker = Matchmaker::with_default_weights();
        let partners = vec![
            create_partner(1, "Emma", 29, "Paris", &["hiking"]),
            create_partner(2, "Lou", 31, "Paris", &[]),
            create_partner(3, "Nina", 44, "Lyon", &[]),
        ];

        let first = matchmaker.rank(
            &create_user(),
            partners.clone(),
            &MatchFilters::default(),
            SortKey::Compatibility,
        );
        let second = matchmaker.rank(
            &create_user(),
            partners,
            &MatchFilters::default(),
            SortKey::Compatibility,
        );

        let ids = |outcome: &RankOutcome| -> Vec<(u64, u8)> {
            outcome
                .ranked
                .iter()
                .map(|s| (s.partner.id, s.compatibility_score))
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }
}
