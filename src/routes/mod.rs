// Route exports
pub mod matching;
pub mod messages;
pub mod users;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matchmaker;
use crate::services::{CacheManager, MySqlClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MySqlClient>,
    pub cache: Option<Arc<CacheManager>>,
    pub matchmaker: Matchmaker,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(matching::configure)
            .configure(users::configure)
            .configure(messages::configure),
    );
}
