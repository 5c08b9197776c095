// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    MatchFilters, MatchRecord, Message, NewUser, PartnerProfile, ScoredPartner, ScoringWeights,
    SearchPreferences, SortKey, UserProfile,
};
pub use requests::{CalculateCompatibilityRequest, RegisterUserRequest, SendMessageRequest};
pub use responses::{
    CompatibilityResponse, ErrorResponse, HealthResponse, RegisterUserResponse, SendMessageResponse,
};
