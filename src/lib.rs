//! Valentin Algo - compatibility matching service for the Valentin dating app
//!
//! This library provides the scoring and ranking pipeline used by the
//! Valentin app: every active partner profile is scored against the
//! requesting user, then filtered and sorted into the result list the
//! client renders.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compatibility_score, Matchmaker, RankOutcome};
pub use crate::models::{
    CalculateCompatibilityRequest, CompatibilityResponse, MatchFilters, PartnerProfile,
    ScoredPartner, ScoringWeights, SortKey, UserProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matchmaker = Matchmaker::with_default_weights();
        let user = UserProfile {
            name: "Test".to_string(),
            age: None,
            city: None,
            selected_traits: vec![],
            selected_hobbies: vec![],
            description: None,
            search_preferences: Default::default(),
        };

        let outcome = matchmaker.rank(&user, vec![], &MatchFilters::default(), SortKey::Compatibility);
        assert!(outcome.ranked.is_empty());
    }
}
