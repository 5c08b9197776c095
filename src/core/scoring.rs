use crate::models::{PartnerProfile, ScoringWeights, UserProfile};

/// Compatibility score (0-100) between a user and a partner profile
///
/// Additive formula:
///   50 base
///   + age proximity (within 5 years: +15, within 10: +5)
///   + same city, case-insensitive: +20
///   + 5 per shared hobby
///   + 3 per shared personality trait
/// capped at 100. Missing optional fields skip their factor; the
/// calculation never fails.
pub fn compatibility_score(
    user: &UserProfile,
    partner: &PartnerProfile,
    weights: &ScoringWeights,
) -> u8 {
    let mut score = weights.base;

    // Age proximity needs an age on both sides
    if let (Some(user_age), Some(partner_age)) = (user.age, partner.age) {
        let diff = user_age.abs_diff(partner_age);
        if diff <= 5 {
            score += weights.age_close;
        } else if diff <= 10 {
            score += weights.age_near;
        }
    }

    // City match is all-or-nothing, no partial credit
    if let (Some(user_city), Some(partner_city)) = (&user.city, &partner.city) {
        if user_city.to_lowercase() == partner_city.to_lowercase() {
            score += weights.city;
        }
    }

    // Overlaps are exact string matches, counted over the user's lists
    let shared_hobbies = user
        .selected_hobbies
        .iter()
        .filter(|&hobby| partner.hobbies.contains(hobby))
        .count() as u32;
    score += shared_hobbies * weights.per_hobby;

    let shared_traits = user
        .selected_traits
        .iter()
        .filter(|&shared| partner.personality.contains(shared))
        .count() as u32;
    score += shared_traits * weights.per_trait;

    score.min(100) as u8
}
