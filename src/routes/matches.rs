use actix_web::{web, HttpResponse};

use crate::errors::ApiResult;
use crate::models::MatchWithProfiles;
use crate::routes::AppState;
use crate::services::{AuthUser, CacheKey};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches", web::get().to(get_matches));
}

/// GET /api/matches - the caller's matches with both participants joined,
/// newest first
///
/// Served from the two-tier cache when possible; swipe recording invalidates
/// both participants' keys when a new match is created.
async fn get_matches(user: AuthUser, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let profile = state.store.get_profile_by_subject(&user.subject).await?;

    let cache_key = CacheKey::matches(profile.id);
    if let Ok(cached) = state.cache.get::<Vec<MatchWithProfiles>>(&cache_key).await {
        return Ok(HttpResponse::Ok().json(cached));
    }

    let matches = state.store.list_matches(profile.id).await?;

    if let Err(e) = state.cache.set(&cache_key, &matches).await {
        tracing::warn!("failed to cache match list for {}: {}", profile.id, e);
    }

    Ok(HttpResponse::Ok().json(matches))
}
