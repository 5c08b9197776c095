use crate::models::{MatchFilters, PartnerProfile, SearchPreferences};

/// Case-insensitive substring test shared by every city filter
///
/// An empty needle passes everything; a partner without a city fails any
/// non-empty needle.
#[inline]
fn city_contains(city: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match city {
        Some(city) => city.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

/// Check a partner against the ad-hoc filters and the user's stored
/// search preferences
///
/// All conditions are ANDed: the ad-hoc city filter, the inclusive age
/// range, and the stored preferred city are applied independently.
#[inline]
pub fn passes_filters(
    partner: &PartnerProfile,
    filters: &MatchFilters,
    preferences: &SearchPreferences,
) -> bool {
    if !city_contains(partner.city.as_deref(), &filters.city) {
        return false;
    }

    // Inclusive age range; a partner without an age never satisfies it
    match partner.age {
        Some(age) if age >= filters.min_age && age <= filters.max_age => {}
        _ => return false,
    }

    if !city_contains(partner.city.as_deref(), &preferences.preferred_city) {
        return false;
    }

    true
}
