use serde::{Deserialize, Serialize};

/// Profile a user submits when searching for partners
///
/// Built by the registration flow; immutable for the duration of a
/// compatibility request. Optional fields simply contribute nothing to
/// the score when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "selectedTraits", default)]
    pub selected_traits: Vec<String>,
    #[serde(rename = "selectedHobbies", default)]
    pub selected_hobbies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "searchPreferences", default)]
    pub search_preferences: SearchPreferences,
}

/// Stored search preferences attached to a user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    #[serde(rename = "minAge", default = "default_min_age")]
    pub min_age: u8,
    #[serde(rename = "maxAge", default = "default_max_age")]
    pub max_age: u8,
    #[serde(rename = "preferredCity", default)]
    pub preferred_city: String,
    #[serde(rename = "mustHaveTraits", default)]
    pub must_have_traits: Vec<String>,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
            preferred_city: String::new(),
            must_have_traits: Vec::new(),
        }
    }
}

fn default_min_age() -> u8 {
    18
}

fn default_max_age() -> u8 {
    99
}

fn default_true() -> bool {
    true
}

/// Static partner record the matching pipeline scores against
///
/// `hobbies` and `personality` keep their stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

/// Partner with its computed compatibility score attached
///
/// Request-scoped output: the score is recomputed on every request and
/// never treated as persisted partner state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPartner {
    #[serde(flatten)]
    pub partner: PartnerProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
}

/// Ad-hoc filters a client can apply on top of stored preferences
///
/// An empty city string passes every partner; the age range is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default)]
    pub city: String,
    #[serde(rename = "minAge", default = "default_min_age")]
    pub min_age: u8,
    #[serde(rename = "maxAge", default = "default_max_age")]
    pub max_age: u8,
}

impl Default for MatchFilters {
    fn default() -> Self {
        Self {
            city: String::new(),
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

/// Sort order for ranked results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest compatibility first
    #[default]
    Compatibility,
    /// Youngest first
    Age,
    /// Alphabetical, case-insensitive
    Name,
}

/// Additive bonuses used by the compatibility calculation
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub base: u32,
    pub age_close: u32,
    pub age_near: u32,
    pub city: u32,
    pub per_hobby: u32,
    pub per_trait: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 50,
            age_close: 15,
            age_near: 5,
            city: 20,
            per_hobby: 5,
            per_trait: 3,
        }
    }
}

/// New user as accepted by the registration endpoint
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: Option<u8>,
    pub city: Option<String>,
    pub personality_traits: Vec<String>,
    pub hobbies: Vec<String>,
    pub description: Option<String>,
    pub email: String,
    pub password: String,
}

/// One logged compatibility computation, joined with partner display data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(rename = "partnerId")]
    pub partner_id: u64,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Message exchanged within a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    #[serde(rename = "matchId")]
    pub match_id: u64,
    #[serde(rename = "senderId")]
    pub sender_id: u64,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
