// Route exports
pub mod discovery;
pub mod health;
pub mod interests;
pub mod matches;
pub mod messages;
pub mod moderation;
pub mod profiles;
pub mod swipes;

use actix_web::web;
use std::sync::Arc;

use crate::config::DiscoverySettings;
use crate::services::{CacheManager, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub discovery: DiscoverySettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(interests::configure)
            .configure(profiles::configure)
            .configure(discovery::configure)
            .configure(swipes::configure)
            .configure(matches::configure)
            .configure(messages::configure)
            .configure(moderation::configure),
    );
}
