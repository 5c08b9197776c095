use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchFilters, NewUser, SearchPreferences, SortKey, UserProfile};

/// Request to register a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 99))]
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub city: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(rename = "personalityTraits", default)]
    pub personality_traits: Vec<String>,
    #[serde(rename = "selectedHobbies", default)]
    pub selected_hobbies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    // Accepted for client round-tripping; not persisted with the user row
    #[serde(rename = "searchPreferences", default)]
    pub search_preferences: SearchPreferences,
}

impl From<RegisterUserRequest> for NewUser {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            city: req.city,
            personality_traits: req.personality_traits,
            hobbies: req.selected_hobbies,
            description: req.description,
            email: req.email,
            password: req.password,
        }
    }
}

/// Request to score and rank all active partners for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateCompatibilityRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: u64,
    #[serde(rename = "userData")]
    pub user_data: UserProfile,
    #[serde(default)]
    pub filters: MatchFilters,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortKey,
}

/// Request to send a message within a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[serde(rename = "matchId")]
    pub match_id: u64,
    #[serde(rename = "senderId")]
    pub sender_id: u64,
    #[validate(length(min = 1))]
    pub content: String,
}
