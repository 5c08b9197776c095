use serde::{Deserialize, Serialize};

use crate::models::domain::ScoredPartner;

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub matches: Vec<ScoredPartner>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "bestMatch")]
    pub best_match: Option<ScoredPartner>,
}

/// Response after registering a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub message: String,
}

/// Response after storing a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    #[serde(rename = "messageId")]
    pub message_id: u64,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
